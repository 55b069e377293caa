//! When steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use hextodo::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};
use rstest_bdd_macros::when;

#[when(r#"a task with id "{id}" and title "{title}" is saved"#)]
fn save_task(world: &mut TaskWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let task = Task::create(TaskId::from(id), title, None).wrap_err("build task")?;
    run_async(world.repository.save(&task)).map_err(|err| eyre::eyre!("save failed: {err}"))?;
    world.created.push(task);
    Ok(())
}

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskWorld, title: String) {
    let result = run_async(world.use_cases.create.execute(&title, None));
    if let Ok(task) = &result {
        world.created.push(task.clone());
    }
    world.last_create_result = Some(result);
}

#[when("a task with a blank title is created")]
fn create_blank_task(world: &mut TaskWorld) {
    world.last_create_result = Some(run_async(world.use_cases.create.execute("   ", None)));
}

#[when(r#"the task titled "{title}" is completed"#)]
fn complete_task(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.created_titled(&title)?.id().clone();
    run_async(world.use_cases.complete.execute(&id))
        .map_err(|err| eyre::eyre!("completion failed: {err}"))?;
    Ok(())
}
