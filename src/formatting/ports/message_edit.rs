//! Remote message-edit port.
//!
//! The host performs the actual mutation (usually an HTTP `PATCH`). The
//! overlay only needs a success or failure outcome.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{ChannelId, MessageId};

/// Result type for message-edit operations.
pub type MessageEditResult<T> = Result<T, MessageEditError>;

/// Edit request with the new content as the only mutated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessageRequest {
    /// Channel containing the message.
    pub channel_id: ChannelId,
    /// Message to edit.
    pub message_id: MessageId,
    /// Replacement content.
    pub content: String,
}

impl EditMessageRequest {
    /// Creates an edit request.
    #[must_use]
    pub fn new(channel_id: ChannelId, message_id: MessageId, content: impl Into<String>) -> Self {
        Self {
            channel_id,
            message_id,
            content: content.into(),
        }
    }

    /// REST route addressed by the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use marginalia::domain::{ChannelId, MessageId};
    /// use marginalia::formatting::ports::EditMessageRequest;
    ///
    /// let request = EditMessageRequest::new(ChannelId::new("c1"), MessageId::new("m1"), "hi");
    /// assert_eq!(request.route(), "/channels/c1/messages/m1");
    /// ```
    #[must_use]
    pub fn route(&self) -> String {
        format!(
            "/channels/{}/messages/{}",
            self.channel_id, self.message_id
        )
    }

    /// JSON body for the edit call.
    #[must_use]
    pub fn body(&self) -> Value {
        json!({ "content": self.content })
    }
}

/// Port for submitting message edits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageEditor: Send + Sync {
    /// Replaces the content of a message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageEditError`] when the edit is not applied for any
    /// reason.
    async fn edit_message(&self, request: &EditMessageRequest) -> MessageEditResult<()>;
}

/// Failures reported by message-edit adapters.
///
/// The dispatcher treats every variant the same way; the distinction only
/// matters for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum MessageEditError {
    /// The request never reached the server or the connection failed.
    #[error("message edit transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server rejected the new content.
    #[error("message edit rejected with status {status}: {reason}")]
    Rejected {
        /// HTTP-like status code.
        status: u16,
        /// Server-supplied reason.
        reason: String,
    },

    /// The caller is being rate limited.
    #[error("message edit rate limited, retry after {retry_after_ms} ms")]
    RateLimited {
        /// Suggested back-off in milliseconds.
        retry_after_ms: u64,
    },

    /// The session is not allowed to edit this message.
    #[error("not authorised to edit message")]
    Unauthorized,
}

impl MessageEditError {
    /// Wraps a transport error from an adapter.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
