//! Reversible markdown format rules.
//!
//! A rule pairs an applicability predicate with the transform it guards.
//! Predicates compare only the content boundaries (exact prefix and suffix
//! matches), so `**bold**extra**` still counts as already bold.

use std::fmt;

/// Applicability predicate evaluated against the current content.
pub type RulePredicate = fn(&str) -> bool;

/// Pure content-to-content mapping.
pub type RuleTransform = fn(&str) -> String;

/// A single formatting action offered in a message's context menu.
///
/// Rules are plain values. A rule's predicate must reject any content its
/// own transform produced, so a rule is never offered twice in a row.
///
/// # Examples
///
/// ```
/// use marginalia::formatting::domain::SPOILER;
///
/// let wrapped = SPOILER.transform("text");
/// assert_eq!(wrapped, "||text||");
/// assert!(!SPOILER.applies_to(&wrapped));
/// assert!(SPOILER.applies_to("text"));
/// ```
#[derive(Clone, Copy)]
pub struct FormatRule {
    id: &'static str,
    label: &'static str,
    confirmation: &'static str,
    applies: RulePredicate,
    transform: RuleTransform,
}

impl FormatRule {
    /// Creates a rule descriptor.
    #[must_use]
    pub const fn new(
        id: &'static str,
        label: &'static str,
        confirmation: &'static str,
        applies: RulePredicate,
        transform: RuleTransform,
    ) -> Self {
        Self {
            id,
            label,
            confirmation,
            applies,
            transform,
        }
    }

    /// Stable identifier, also used as the menu entry id.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Notification text shown after a successful edit.
    #[must_use]
    pub const fn confirmation(&self) -> &'static str {
        self.confirmation
    }

    /// Returns `true` when the rule should be offered for `content`.
    #[must_use]
    pub fn applies_to(&self, content: &str) -> bool {
        (self.applies)(content)
    }

    /// Applies the rule's transform to `content`.
    #[must_use]
    pub fn transform(&self, content: &str) -> String {
        (self.transform)(content)
    }
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRule")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FormatRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FormatRule {}

const SPOILER_MARKER: &str = "||";
const BOLD_MARKER: &str = "**";
const STRIKE_MARKER: &str = "~~";
const QUOTE_PREFIX: &str = "> ";

fn is_wrapped(content: &str, marker: &str) -> bool {
    content.starts_with(marker) && content.ends_with(marker)
}

fn wrap(content: &str, marker: &str) -> String {
    format!("{marker}{content}{marker}")
}

/// Wraps content in spoiler bars (`||…||`).
pub const SPOILER: FormatRule = FormatRule::new(
    "format-spoiler",
    "Spoiler",
    "Your message is now a spoiler!",
    |content| !is_wrapped(content, SPOILER_MARKER),
    |content| wrap(content, SPOILER_MARKER),
);

/// Wraps content in bold markers (`**…**`).
pub const BOLD: FormatRule = FormatRule::new(
    "format-bold",
    "Bold",
    "Boldified!",
    |content| !is_wrapped(content, BOLD_MARKER),
    |content| wrap(content, BOLD_MARKER),
);

/// Prefixes content with a block quote marker (`> `).
///
/// There is no inverse; the predicate only guards against quoting twice.
pub const QUOTE: FormatRule = FormatRule::new(
    "format-quote",
    "Quote",
    "Quoted!",
    |content| !content.starts_with(QUOTE_PREFIX),
    |content| format!("{QUOTE_PREFIX}{content}"),
);

/// Wraps content in strikethrough markers (`~~…~~`).
pub const STRIKETHROUGH: FormatRule = FormatRule::new(
    "format-strike",
    "Strikethrough",
    "Struck it out!",
    |content| !is_wrapped(content, STRIKE_MARKER),
    |content| wrap(content, STRIKE_MARKER),
);

/// Built-in rules in menu priority order.
pub const BUILTIN_RULES: [FormatRule; 4] = [SPOILER, BOLD, QUOTE, STRIKETHROUGH];
