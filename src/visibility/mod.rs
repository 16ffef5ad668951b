//! Ephemeral, client-local hiding of messages.
//!
//! The [`services::VisibilityStore`] is the single writer of the hidden set.
//! Renderers read it through [`adapters::HiddenMessageFilter`], which only
//! holds a [`services::VisibilityReader`].

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
