//! Marginalia: message formatting and hiding overlay for chat clients.
//!
//! The crate adds two behaviours to a message's context menu:
//!
//! - reversible markdown formatting (spoiler, bold, quote, strikethrough)
//!   of the user's own messages, applied through a remote edit;
//! - hiding any message from the timeline until the session ends.
//!
//! # Architecture
//!
//! Each context follows hexagonal architecture principles:
//!
//! - **Domain**: pure values with no infrastructure dependencies
//! - **Ports**: traits for the host's collaborators (edit RPC, identity,
//!   notifications, render filter)
//! - **Adapters**: in-memory implementations of those ports
//! - **Services**: the rule engine, dispatcher, store and menu services
//!
//! # Modules
//!
//! - [`domain`]: shared identifiers and the message snapshot
//! - [`formatting`]: format rules, rule engine and dispatcher
//! - [`visibility`]: hidden-message store and render filter
//! - [`menu`]: context-menu contribution and command execution
//! - [`config`]: overlay configuration
//! - [`overlay`]: per-session composition root

pub mod config;
pub mod domain;
pub mod formatting;
pub mod menu;
pub mod overlay;
pub mod visibility;
