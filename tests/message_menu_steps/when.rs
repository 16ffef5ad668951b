//! When steps for message menu BDD scenarios.

use super::world::{MenuWorld, run_async};
use rstest_bdd_macros::when;

#[when("I open the context menu")]
fn open_context_menu(world: &mut MenuWorld) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no signed-in session in scenario world"))?;
    session.contribute(world.message.as_ref(), &mut world.menu);
    Ok(())
}

#[when(r#"I select the "{entry_id}" entry"#)]
fn select_entry(world: &mut MenuWorld, entry_id: String) -> Result<(), eyre::Report> {
    let command = world
        .menu
        .overlay_entries()
        .into_iter()
        .find(|entry| entry.id == entry_id)
        .map(|entry| entry.command.clone())
        .ok_or_else(|| eyre::eyre!("menu has no entry '{entry_id}'"))?;
    let outcome = run_async(world.session()?.execute(&command));
    world.last_outcome = Some(outcome);
    Ok(())
}
