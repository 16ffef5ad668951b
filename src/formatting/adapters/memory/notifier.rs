//! Notifier that keeps notifications in memory.

use std::sync::{Arc, Mutex, PoisonError};

use crate::formatting::ports::{Notifier, Severity};

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    /// Displayed text.
    pub text: String,
    /// Severity the text was shown with.
    pub severity: Severity,
}

/// Notifier that records every notification. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<RecordedNotification>>>,
}

impl RecordingNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications in the order they were shown.
    #[must_use]
    pub fn notifications(&self) -> Vec<RecordedNotification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Counts notifications with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|notification| notification.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, text: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotification {
                text: text.to_owned(),
                severity,
            });
    }
}
