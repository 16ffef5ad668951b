//! Render-side contract for consulting hidden state.

use crate::domain::MessageId;

/// Port the host's message-list renderer calls for every message.
///
/// Implementations must answer from current state on every call so a hide
/// takes effect on the next render.
pub trait RenderFilter: Send + Sync {
    /// Returns `false` when the message must be left out of the timeline.
    fn is_visible(&self, message_id: &MessageId) -> bool;
}
