//! Then steps for task creation BDD scenarios.

use std::collections::HashSet;

use super::world::{TaskWorld, run_async};
use hextodo::task::{
    domain::{Task, TaskDomainError},
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

fn list(world: &TaskWorld) -> Result<Vec<Task>, eyre::Report> {
    run_async(world.use_cases.get_all.execute()).map_err(|err| eyre::eyre!("listing failed: {err}"))
}

#[then(r#"listing returns only the task with id "{id}" and title "{title}""#)]
fn listing_returns_only(world: &TaskWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let tasks = list(world)?;
    let [task] = tasks.as_slice() else {
        return Err(eyre::eyre!("expected exactly one task, found {}", tasks.len()));
    };
    if task.id().as_str() != id || task.title() != title || task.is_completed() {
        return Err(eyre::eyre!("unexpected task {task:?}"));
    }
    Ok(())
}

#[then("task creation fails with an empty title error")]
fn creation_fails_with_empty_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected empty title error, got {result:?}"));
    }
    Ok(())
}

#[then("the repository holds no tasks")]
fn repository_holds_no_tasks(world: &TaskWorld) -> Result<(), eyre::Report> {
    let tasks = list(world)?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"listing returns titles "{titles}" with distinct ids"#)]
fn listing_returns_titles(world: &TaskWorld, titles: String) -> Result<(), eyre::Report> {
    let tasks = list(world)?;
    let listed: Vec<&str> = tasks.iter().map(Task::title).collect();
    let expected: Vec<&str> = titles.split(',').collect();
    if listed != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {listed:?}"));
    }

    let ids: HashSet<&str> = tasks.iter().map(|task| task.id().as_str()).collect();
    if ids.len() != tasks.len() {
        return Err(eyre::eyre!("task identifiers are not distinct"));
    }
    Ok(())
}

#[then(r#"the task titled "{title}" is completed in the listing"#)]
fn task_completed_in_listing(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let tasks = list(world)?;
    let task = tasks
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no task titled {title:?} in listing"))?;
    if !task.is_completed() {
        return Err(eyre::eyre!("task {title:?} is not completed"));
    }
    Ok(())
}
