//! Unit tests for the menu contribution point.

use std::sync::Arc;

use rstest::{fixture, rstest};

use crate::config::OverlayConfig;
use crate::domain::{MessageId, MessageSnapshot, UserId};
use crate::formatting::{
    domain::{FormatRule, SPOILER},
    services::FormatRuleEngine,
};
use crate::menu::{
    adapters::StaticIdentity,
    domain::{ContextMenu, MenuCommand, MenuNode},
    ports::{IdentityProvider, MockIdentityProvider},
    services::MenuContributionPoint,
};
use crate::visibility::services::VisibilityStore;

const ME: &str = "user-me";

#[fixture]
fn store() -> Arc<VisibilityStore> {
    Arc::new(VisibilityStore::new())
}

fn point_with<I: IdentityProvider>(
    identity: I,
    store: &Arc<VisibilityStore>,
    config: OverlayConfig,
) -> MenuContributionPoint<I> {
    MenuContributionPoint::new(
        Arc::new(identity),
        FormatRuleEngine::new(),
        Arc::clone(store),
        Arc::new(config),
    )
}

fn point(store: &Arc<VisibilityStore>) -> MenuContributionPoint<StaticIdentity> {
    point_with(StaticIdentity::signed_in(ME), store, OverlayConfig::default())
}

fn own_message(content: &str) -> MessageSnapshot {
    MessageSnapshot::new("m1", "c1", ME, content)
}

fn entry_ids(menu: &ContextMenu) -> Vec<String> {
    menu.overlay_entries()
        .iter()
        .map(|entry| entry.id.clone())
        .collect()
}

#[rstest]
fn own_message_gets_format_entries_then_hide(store: Arc<VisibilityStore>) {
    let mut menu = ContextMenu::default();

    let added = point(&store).contribute(Some(&own_message("hello")), &mut menu);

    assert_eq!(added, 5);
    assert_eq!(
        entry_ids(&menu),
        [
            "format-spoiler",
            "format-bold",
            "format-quote",
            "format-strike",
            "hide-message"
        ]
    );
}

#[rstest]
fn other_authors_only_get_the_hide_entry(store: Arc<VisibilityStore>) {
    let mut menu = ContextMenu::default();
    let message = MessageSnapshot::new("m1", "c1", "someone-else", "hello");

    point(&store).contribute(Some(&message), &mut menu);

    assert_eq!(entry_ids(&menu), ["hide-message"]);
}

#[rstest]
fn signed_out_user_gets_no_format_entries(store: Arc<VisibilityStore>) {
    let mut menu = ContextMenu::default();
    let contribution = point_with(StaticIdentity::signed_out(), &store, OverlayConfig::default());

    contribution.contribute(Some(&own_message("hello")), &mut menu);

    assert_eq!(entry_ids(&menu), ["hide-message"]);
}

#[rstest]
fn missing_message_is_a_no_op(store: Arc<VisibilityStore>) {
    let mut menu = ContextMenu::new(vec![MenuNode::item("reply", "Reply")]);

    let added = point(&store).contribute(None, &mut menu);

    assert_eq!(added, 0);
    assert_eq!(menu.nodes().len(), 1);
}

#[rstest]
#[case::blank_message_id(MessageSnapshot::new("", "c1", ME, "hi"))]
#[case::blank_channel_id(MessageSnapshot::new("m1", " ", ME, "hi"))]
#[case::blank_author_id(MessageSnapshot::new("m1", "c1", "", "hi"))]
fn malformed_message_is_skipped(store: Arc<VisibilityStore>, #[case] message: MessageSnapshot) {
    let mut menu = ContextMenu::default();

    let added = point(&store).contribute(Some(&message), &mut menu);

    assert_eq!(added, 0);
    assert!(menu.nodes().is_empty());
}

#[rstest]
fn already_hidden_message_is_not_offered_hide(store: Arc<VisibilityStore>) {
    store.hide(MessageId::new("m1"));
    let message = MessageSnapshot::new("m1", "c1", "someone-else", "hello");
    let mut menu = ContextMenu::default();

    let added = point(&store).contribute(Some(&message), &mut menu);

    assert_eq!(added, 0);
}

#[rstest]
fn hide_entry_can_be_switched_off(store: Arc<VisibilityStore>) {
    let config = OverlayConfig {
        offer_hide_entry: false,
        ..OverlayConfig::default()
    };
    let contribution = point_with(StaticIdentity::signed_in(ME), &store, config);

    let entries = contribution.entries_for(&own_message("hi"));

    assert_eq!(entries.len(), 4);
}

#[rstest]
fn format_commands_capture_the_message_at_build_time(store: Arc<VisibilityStore>) {
    let entries = point(&store).entries_for(&own_message("**already bold**"));

    let first = entries.first().expect("spoiler entry");
    assert_eq!(first.label, "Spoiler");
    assert_eq!(
        first.command,
        MenuCommand::Format {
            channel_id: "c1".into(),
            message_id: "m1".into(),
            original_content: "**already bold**".to_owned(),
            rule_id: "format-spoiler".to_owned(),
        }
    );
    assert!(entries.iter().all(|entry| entry.id != "format-bold"));
}

#[rstest]
fn identity_is_queried_once_per_build(store: Arc<VisibilityStore>) {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_current_user_id()
        .times(1)
        .returning(|| Some(UserId::new(ME)));
    let contribution = point_with(identity, &store, OverlayConfig::default());
    let mut menu = ContextMenu::default();

    contribution.contribute(Some(&own_message("hello")), &mut menu);
}

#[rstest]
fn misbehaving_rule_does_not_break_the_menu(store: Arc<VisibilityStore>) {
    fn exploding(_: &str) -> bool {
        panic!("predicate failure");
    }
    fn identity(content: &str) -> String {
        content.to_owned()
    }
    let broken = FormatRule::new("format-broken", "Broken", "never", exploding, identity);
    let engine = FormatRuleEngine::with_rules([broken, SPOILER]).expect("valid table");
    let contribution = MenuContributionPoint::new(
        Arc::new(StaticIdentity::signed_in(ME)),
        engine,
        Arc::clone(&store),
        Arc::new(OverlayConfig::default()),
    );
    let mut menu = ContextMenu::default();

    contribution.contribute(Some(&own_message("hello")), &mut menu);

    assert_eq!(entry_ids(&menu), ["format-spoiler", "hide-message"]);
}
