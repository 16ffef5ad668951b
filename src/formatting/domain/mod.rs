//! Domain types for message formatting.

mod error;
mod request;
mod rule;

pub use error::RuleTableError;
pub use request::{DispatchOutcome, FormatRequest};
pub use rule::{
    BOLD, BUILTIN_RULES, FormatRule, QUOTE, RulePredicate, RuleTransform, SPOILER, STRIKETHROUGH,
};
