//! Errors raised while assembling rule tables.

use thiserror::Error;

/// Errors returned when building a custom rule table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleTableError {
    /// Two rules share the same identifier.
    #[error("duplicate format rule id: {0}")]
    DuplicateRuleId(String),

    /// A rule has an empty identifier.
    #[error("format rule id must not be empty")]
    EmptyRuleId,
}
