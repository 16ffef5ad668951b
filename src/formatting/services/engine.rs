//! Format-rule engine.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::UserId;
use crate::formatting::domain::{BUILTIN_RULES, FormatRule, RuleTableError};

use super::isolation::applies_isolated;

/// Decides which format rules apply to a message.
///
/// The rule table is fixed at construction and shared between clones.
///
/// # Examples
///
/// ```
/// use marginalia::domain::UserId;
/// use marginalia::formatting::services::FormatRuleEngine;
///
/// let engine = FormatRuleEngine::new();
/// let me = UserId::new("u1");
///
/// let labels: Vec<_> = engine
///     .applicable_rules(&me, &me, "**already bold**")
///     .iter()
///     .map(|rule| rule.label())
///     .collect();
/// assert_eq!(labels, ["Spoiler", "Quote", "Strikethrough"]);
///
/// let someone_else = UserId::new("u2");
/// assert!(engine.applicable_rules(&someone_else, &me, "hi").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FormatRuleEngine {
    rules: Arc<[FormatRule]>,
}

impl FormatRuleEngine {
    /// Creates an engine over the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Arc::from(BUILTIN_RULES.as_slice()),
        }
    }

    /// Creates an engine over a custom rule table, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTableError`] when a rule id is empty or repeated.
    pub fn with_rules(rules: impl IntoIterator<Item = FormatRule>) -> Result<Self, RuleTableError> {
        let table: Vec<FormatRule> = rules.into_iter().collect();
        let mut seen = HashSet::with_capacity(table.len());
        for rule in &table {
            if rule.id().trim().is_empty() {
                return Err(RuleTableError::EmptyRuleId);
            }
            if !seen.insert(rule.id()) {
                return Err(RuleTableError::DuplicateRuleId(rule.id().to_owned()));
            }
        }
        Ok(Self {
            rules: Arc::from(table),
        })
    }

    /// Returns the full rule table in priority order.
    #[must_use]
    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn find(&self, rule_id: &str) -> Option<FormatRule> {
        self.rules.iter().find(|rule| rule.id() == rule_id).copied()
    }

    /// Returns the rules applicable to `content`, in priority order.
    ///
    /// Formatting is self-only: when `author` differs from `requester` the
    /// result is empty and no predicate is evaluated. A rule whose predicate
    /// panics is left out.
    #[must_use]
    pub fn applicable_rules(
        &self,
        author: &UserId,
        requester: &UserId,
        content: &str,
    ) -> Vec<FormatRule> {
        if author != requester {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| applies_isolated(rule, content))
            .copied()
            .collect()
    }
}

impl Default for FormatRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
