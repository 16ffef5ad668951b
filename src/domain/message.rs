//! Read-only view of a chat message as supplied by the host.

use serde::{Deserialize, Serialize};

use super::{ChannelId, MessageId, UserId};

/// Snapshot of a message at the moment its context menu was opened.
///
/// The overlay never mutates a snapshot. Content may be empty.
///
/// # Examples
///
/// ```
/// use marginalia::domain::MessageSnapshot;
///
/// let message = MessageSnapshot::new("m1", "c1", "u1", "hello");
/// assert_eq!(message.content(), "hello");
/// assert!(message.is_well_formed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSnapshot {
    id: MessageId,
    channel_id: ChannelId,
    author_id: UserId,
    #[serde(default)]
    content: String,
}

impl MessageSnapshot {
    /// Creates a snapshot from host-supplied fields.
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        channel_id: impl Into<ChannelId>,
        author_id: impl Into<UserId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            author_id: author_id.into(),
            content: content.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the channel identifier.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Returns the author's user identifier.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the current text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` when every identifier is present.
    ///
    /// Snapshots failing this check are skipped by menu contribution.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !(self.id.is_blank() || self.channel_id.is_blank() || self.author_id.is_blank())
    }
}
