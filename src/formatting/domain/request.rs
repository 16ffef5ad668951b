//! Values exchanged between the dispatcher and its callers.

use crate::domain::{ChannelId, MessageId};

use super::FormatRule;

/// A request to apply one rule to one message.
///
/// The identifiers are those of the message the menu was opened on; they
/// are never re-resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    /// Channel containing the message.
    pub channel_id: ChannelId,
    /// Message to edit.
    pub message_id: MessageId,
    /// Content as it was when the menu was built.
    pub original_content: String,
    /// Rule to apply.
    pub rule: FormatRule,
}

impl FormatRequest {
    /// Creates a format request.
    #[must_use]
    pub fn new(
        channel_id: ChannelId,
        message_id: MessageId,
        original_content: impl Into<String>,
        rule: FormatRule,
    ) -> Self {
        Self {
            channel_id,
            message_id,
            original_content: original_content.into(),
            rule,
        }
    }
}

/// Result of a single dispatch.
///
/// Dispatch never fails structurally; the outcome is informational and has
/// already been reported through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The remote edit succeeded with the given content.
    Applied {
        /// Content submitted to the editor.
        new_content: String,
    },
    /// The edit was not applied.
    Failed,
}

impl DispatchOutcome {
    /// Returns `true` for [`DispatchOutcome::Applied`].
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
