//! Identifier newtypes for chat entities.
//!
//! The host client issues opaque string identifiers (snowflakes, UUIDs or
//! anything else). Wrapping them prevents a channel identifier from being
//! passed where a message identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a host-issued identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` when the identifier is empty after trimming.
            ///
            /// Blank identifiers only appear on malformed host payloads.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Consumes the identifier and returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a single chat message.
    ///
    /// # Examples
    ///
    /// ```
    /// use marginalia::domain::MessageId;
    ///
    /// let id = MessageId::new("1169111190824308768");
    /// assert_eq!(id.as_str(), "1169111190824308768");
    /// assert!(!id.is_blank());
    /// ```
    MessageId
);

string_id!(
    /// Identifier of the channel a message was posted in.
    ChannelId
);

string_id!(
    /// Identifier of a user account.
    UserId
);
