//! Given steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use hextodo::task::ports::TaskRepository;
use rstest_bdd_macros::given;

#[given("an empty task repository")]
fn empty_task_repository(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.repository.find_all())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty repository, found {}", tasks.len()));
    }
    Ok(())
}
