//! Panic isolation around rule evaluation.
//!
//! A misbehaving rule must only lose its own menu entry; it must never take
//! down menu construction or the dispatcher.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::formatting::domain::FormatRule;

/// Evaluates the rule's predicate, treating a panic as "not applicable".
pub(crate) fn applies_isolated(rule: &FormatRule, content: &str) -> bool {
    catch_unwind(AssertUnwindSafe(|| rule.applies_to(content))).unwrap_or_else(|_| {
        tracing::warn!(rule_id = rule.id(), "format rule predicate panicked; rule skipped");
        false
    })
}

/// Runs the rule's transform, returning `None` if it panicked.
pub(crate) fn transform_isolated(rule: &FormatRule, content: &str) -> Option<String> {
    catch_unwind(AssertUnwindSafe(|| rule.transform(content))).ok()
}
