//! Transient user notification port.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The action completed.
    Success,
    /// The action did not complete.
    Failure,
}

/// Port for presenting short-lived notifications (toasts).
///
/// Fire-and-forget: implementations must not block and no result is
/// consumed.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows `text` with the given severity.
    fn notify(&self, text: &str, severity: Severity);
}
