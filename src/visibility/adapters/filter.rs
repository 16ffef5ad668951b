//! Render filter backed by the session's visibility store.

use crate::domain::MessageId;
use crate::visibility::{ports::RenderFilter, services::VisibilityReader};

/// Render filter that hides messages present in the hidden set.
///
/// A filter without a store (not yet initialised, or already torn down)
/// lets every message through.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use marginalia::domain::MessageId;
/// use marginalia::visibility::{
///     adapters::HiddenMessageFilter, ports::RenderFilter, services::VisibilityStore,
/// };
///
/// let store = Arc::new(VisibilityStore::new());
/// let filter = HiddenMessageFilter::new(store.reader());
/// store.hide(MessageId::new("m1"));
///
/// assert!(!filter.is_visible(&MessageId::new("m1")));
/// assert!(filter.is_visible(&MessageId::new("m2")));
/// assert!(HiddenMessageFilter::detached().is_visible(&MessageId::new("m1")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HiddenMessageFilter {
    reader: Option<VisibilityReader>,
}

impl HiddenMessageFilter {
    /// Creates a filter reading from a store.
    #[must_use]
    pub const fn new(reader: VisibilityReader) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// Creates a filter with no store attached.
    #[must_use]
    pub const fn detached() -> Self {
        Self { reader: None }
    }

    /// Removes hidden messages from a rendered list, keeping order.
    pub fn retain_visible<T, F>(&self, items: &mut Vec<T>, id_of: F)
    where
        F: Fn(&T) -> &MessageId,
    {
        items.retain(|item| self.is_visible(id_of(item)));
    }
}

impl RenderFilter for HiddenMessageFilter {
    fn is_visible(&self, message_id: &MessageId) -> bool {
        self.reader
            .as_ref()
            .is_none_or(|reader| !reader.is_hidden(message_id))
    }
}
