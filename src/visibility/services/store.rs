//! Session-scoped hidden-message store.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use tracing::debug;

use crate::domain::MessageId;

/// Set of messages hidden for the lifetime of one client session.
///
/// The set only grows: there is no unhide, and a reload (dropping the
/// store) is the only reset. Lock poisoning is recovered because every
/// operation leaves the set consistent.
///
/// # Examples
///
/// ```
/// use marginalia::domain::MessageId;
/// use marginalia::visibility::services::VisibilityStore;
///
/// let store = VisibilityStore::new();
/// let id = MessageId::new("m1");
/// assert!(!store.is_hidden(&id));
///
/// store.hide(id.clone());
/// store.hide(id.clone());
/// assert!(store.is_hidden(&id));
/// assert_eq!(store.hidden_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct VisibilityStore {
    hidden: RwLock<HashSet<MessageId>>,
}

impl VisibilityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides a message. Hiding an already hidden message is a no-op.
    pub fn hide(&self, message_id: MessageId) {
        let mut hidden = self.hidden.write().unwrap_or_else(PoisonError::into_inner);
        if hidden.insert(message_id.clone()) {
            debug!(%message_id, "message hidden for this session");
        }
    }

    /// Returns `true` when the message has been hidden this session.
    #[must_use]
    pub fn is_hidden(&self, message_id: &MessageId) -> bool {
        self.hidden
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(message_id)
    }

    /// Returns `true` when a hide entry should be offered for the message.
    #[must_use]
    pub fn should_offer_hide(&self, message_id: &MessageId) -> bool {
        !self.is_hidden(message_id)
    }

    /// Number of distinct hidden messages.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns a read-only handle for render-side consumers.
    ///
    /// The handle does not keep the store alive.
    #[must_use]
    pub fn reader(self: &Arc<Self>) -> VisibilityReader {
        VisibilityReader {
            store: Arc::downgrade(self),
        }
    }

    #[cfg(test)]
    pub(crate) fn clear(&self) {
        self.hidden
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Read-only view of a [`VisibilityStore`].
///
/// Once the owning session drops the store, every message reads as not
/// hidden.
#[derive(Debug, Clone, Default)]
pub struct VisibilityReader {
    store: Weak<VisibilityStore>,
}

impl VisibilityReader {
    /// Returns `true` when the message is hidden in a live store.
    #[must_use]
    pub fn is_hidden(&self, message_id: &MessageId) -> bool {
        self.store
            .upgrade()
            .is_some_and(|store| store.is_hidden(message_id))
    }

    /// Returns `true` while the backing store is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }
}
