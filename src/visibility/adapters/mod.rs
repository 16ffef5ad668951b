//! Adapter implementations for visibility ports.

mod filter;

pub use filter::HiddenMessageFilter;
