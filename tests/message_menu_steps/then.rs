//! Then steps for message menu BDD scenarios.

use super::world::MenuWorld;
use marginalia::{
    domain::MessageId,
    formatting::ports::Severity,
    visibility::ports::RenderFilter,
};
use rstest_bdd_macros::then;

#[then(r#"the menu offers "{ids}""#)]
fn menu_offers(world: &MenuWorld, ids: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = ids.split(',').collect();
    let actual: Vec<&str> = world
        .menu
        .overlay_entries()
        .into_iter()
        .map(|entry| entry.id.as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected entries {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the message "{id}" is edited to "{content}""#)]
fn message_edited_to(world: &MenuWorld, id: String, content: String) -> Result<(), eyre::Report> {
    let submitted = world.editor.submitted();
    let request = submitted
        .iter()
        .find(|request| request.message_id.as_str() == id)
        .ok_or_else(|| eyre::eyre!("no edit submitted for message '{id}'"))?;
    if request.content != content {
        return Err(eyre::eyre!(
            "expected content '{content}', found '{}'",
            request.content
        ));
    }
    Ok(())
}

#[then(r#"a success notification "{text}" is shown"#)]
fn success_notification_shown(world: &MenuWorld, text: String) -> Result<(), eyre::Report> {
    let shown = world
        .notifier
        .notifications()
        .into_iter()
        .any(|notification| {
            notification.text == text && notification.severity == Severity::Success
        });
    if !shown {
        return Err(eyre::eyre!("expected success notification '{text}'"));
    }
    Ok(())
}

#[then("{failures:usize} failure and {successes:usize} success notifications are shown")]
fn notification_counts(
    world: &MenuWorld,
    failures: usize,
    successes: usize,
) -> Result<(), eyre::Report> {
    let failed = world.notifier.count(Severity::Failure);
    let succeeded = world.notifier.count(Severity::Success);
    if failed != failures || succeeded != successes {
        return Err(eyre::eyre!(
            "expected {failures} failure/{successes} success notifications, found {failed}/{succeeded}"
        ));
    }
    Ok(())
}

#[then(r#"the message "{id}" is hidden from the timeline"#)]
fn message_hidden(world: &MenuWorld, id: String) -> Result<(), eyre::Report> {
    if world.session()?.render_filter().is_visible(&MessageId::new(id.clone())) {
        return Err(eyre::eyre!("expected message '{id}' to be hidden"));
    }
    Ok(())
}

#[then(r#"the message "{id}" is still visible"#)]
fn message_still_visible(world: &MenuWorld, id: String) -> Result<(), eyre::Report> {
    if !world.session()?.render_filter().is_visible(&MessageId::new(id.clone())) {
        return Err(eyre::eyre!("expected message '{id}' to remain visible"));
    }
    Ok(())
}
