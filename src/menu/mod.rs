//! Context-menu integration.
//!
//! [`services::MenuContributionPoint`] is the only piece that touches the
//! host's menu tree. Entries carry [`domain::MenuCommand`] values, which
//! [`services::MenuCommandExecutor`] runs when the user selects them.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
