//! Port trait definitions for the formatting subsystem.

pub mod message_edit;
pub mod notification;

pub use message_edit::{EditMessageRequest, MessageEditError, MessageEditResult, MessageEditor};
pub use notification::{Notifier, Severity};

#[cfg(test)]
pub use message_edit::MockMessageEditor;
#[cfg(test)]
pub use notification::MockNotifier;
