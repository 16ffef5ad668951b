//! Reversible markdown formatting of the user's own messages.
//!
//! - [`domain`]: rule descriptors and dispatch values
//! - [`ports`]: message-edit and notification contracts
//! - [`adapters`]: in-memory implementations of the ports
//! - [`services`]: [`services::FormatRuleEngine`] and
//!   [`services::FormatDispatcher`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
