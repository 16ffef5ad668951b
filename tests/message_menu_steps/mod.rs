//! Step definitions for message menu behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
