//! Overlay configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatting::services::DEFAULT_FAILURE_NOTICE;

/// Errors raised while loading an [`OverlayConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON or has unknown fields.
    #[error("invalid overlay configuration: {0}")]
    Parse(String),

    /// A required text field is empty.
    #[error("overlay configuration field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Host-facing settings for the overlay.
///
/// Missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use marginalia::config::OverlayConfig;
///
/// let config = OverlayConfig::from_json_str(r#"{ "hide_entry_label": "Hide" }"#)
///     .expect("valid config");
/// assert_eq!(config.hide_entry_label, "Hide");
/// assert_eq!(config.actions_anchor_id, "message-actions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Id of the host entry or group the overlay entries are placed next to.
    pub actions_anchor_id: String,
    /// Notification shown when a format edit fails.
    pub edit_failure_notice: String,
    /// Menu entry id for the hide action.
    pub hide_entry_id: String,
    /// Menu label for the hide action.
    pub hide_entry_label: String,
    /// Whether the hide entry is offered at all.
    pub offer_hide_entry: bool,
}

impl OverlayConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields
    /// and [`ConfigError::EmptyField`] when a text field is blank.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every text field is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("actions_anchor_id", &self.actions_anchor_id),
            ("edit_failure_notice", &self.edit_failure_notice),
            ("hide_entry_id", &self.hide_entry_id),
            ("hide_entry_label", &self.hide_entry_label),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map_or(Ok(()), |(name, _)| Err(ConfigError::EmptyField(name)))
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            actions_anchor_id: "message-actions".to_owned(),
            edit_failure_notice: DEFAULT_FAILURE_NOTICE.to_owned(),
            hide_entry_id: "hide-message".to_owned(),
            hide_entry_label: "Hide Message".to_owned(),
            offer_hide_entry: true,
        }
    }
}
