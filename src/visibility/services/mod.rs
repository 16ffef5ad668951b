//! Visibility services.

mod store;

pub use store::{VisibilityReader, VisibilityStore};
