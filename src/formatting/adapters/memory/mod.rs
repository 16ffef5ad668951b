//! In-memory adapters for the formatting ports.
//!
//! Suitable for tests and for hosts that want to observe dispatches
//! without a network.

mod editor;
mod notifier;

pub use editor::InMemoryMessageEditor;
pub use notifier::{RecordedNotification, RecordingNotifier};
