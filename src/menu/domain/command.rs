//! Deferred menu actions expressed as values.

use serde::{Deserialize, Serialize};

use crate::domain::{ChannelId, MessageId};

/// Action bound to an overlay menu entry.
///
/// Commands carry only identifiers and the content captured when the menu
/// was built; the rule itself is looked up when the command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuCommand {
    /// Apply a format rule and submit the result as an edit.
    Format {
        /// Channel of the message the menu was opened on.
        channel_id: ChannelId,
        /// Message the menu was opened on.
        message_id: MessageId,
        /// Content at menu-build time.
        original_content: String,
        /// Identifier of the rule to apply.
        rule_id: String,
    },
    /// Hide a message for the rest of the session.
    Hide {
        /// Message to hide.
        message_id: MessageId,
    },
}

impl MenuCommand {
    /// Message the command targets.
    #[must_use]
    pub const fn message_id(&self) -> &MessageId {
        match self {
            Self::Format { message_id, .. } | Self::Hide { message_id } => message_id,
        }
    }
}
