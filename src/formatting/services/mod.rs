//! Formatting services.

mod dispatcher;
mod engine;
mod isolation;

pub use dispatcher::{DEFAULT_FAILURE_NOTICE, FormatDispatcher};
pub use engine::FormatRuleEngine;
