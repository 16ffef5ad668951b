//! Menu contribution point.

use std::sync::Arc;

use tracing::debug;

use crate::config::OverlayConfig;
use crate::domain::MessageSnapshot;
use crate::formatting::services::FormatRuleEngine;
use crate::menu::{
    domain::{ContextMenu, MenuCommand, MenuEntry},
    ports::IdentityProvider,
};
use crate::visibility::services::VisibilityStore;

/// Appends overlay entries to a message's context menu.
///
/// Format entries come first, in rule priority order, followed by the hide
/// entry. Nothing here can fail: malformed input yields no entries.
#[derive(Clone)]
pub struct MenuContributionPoint<I>
where
    I: IdentityProvider,
{
    identity: Arc<I>,
    engine: FormatRuleEngine,
    store: Arc<VisibilityStore>,
    config: Arc<OverlayConfig>,
}

impl<I> MenuContributionPoint<I>
where
    I: IdentityProvider,
{
    /// Creates a contribution point.
    #[must_use]
    pub const fn new(
        identity: Arc<I>,
        engine: FormatRuleEngine,
        store: Arc<VisibilityStore>,
        config: Arc<OverlayConfig>,
    ) -> Self {
        Self {
            identity,
            engine,
            store,
            config,
        }
    }

    /// Builds the overlay entries for a message without touching a menu.
    #[must_use]
    pub fn entries_for(&self, message: &MessageSnapshot) -> Vec<MenuEntry> {
        let mut entries = self.format_entries(message);
        if self.config.offer_hide_entry && self.store.should_offer_hide(message.id()) {
            entries.push(MenuEntry::new(
                self.config.hide_entry_id.clone(),
                self.config.hide_entry_label.clone(),
                MenuCommand::Hide {
                    message_id: message.id().clone(),
                },
            ));
        }
        entries
    }

    /// Appends entries for `message` to `menu` and returns how many were added.
    ///
    /// A missing or malformed message leaves the menu untouched.
    pub fn contribute(&self, message: Option<&MessageSnapshot>, menu: &mut ContextMenu) -> usize {
        let Some(snapshot) = message.filter(|candidate| candidate.is_well_formed()) else {
            debug!("context menu opened without a usable message; nothing contributed");
            return 0;
        };

        let entries = self.entries_for(snapshot);
        let added = entries.len();
        if added > 0 {
            menu.append_entries(&self.config.actions_anchor_id, entries);
        }
        added
    }

    fn format_entries(&self, message: &MessageSnapshot) -> Vec<MenuEntry> {
        let Some(requester) = self.identity.current_user_id() else {
            return Vec::new();
        };

        self.engine
            .applicable_rules(message.author_id(), &requester, message.content())
            .into_iter()
            .map(|rule| {
                MenuEntry::new(
                    rule.id(),
                    rule.label(),
                    MenuCommand::Format {
                        channel_id: message.channel_id().clone(),
                        message_id: message.id().clone(),
                        original_content: message.content().to_owned(),
                        rule_id: rule.id().to_owned(),
                    },
                )
            })
            .collect()
    }
}
