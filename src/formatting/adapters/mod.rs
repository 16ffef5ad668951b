//! Adapter implementations for formatting ports.

pub mod memory;
