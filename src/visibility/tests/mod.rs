//! Unit tests for the visibility subsystem.
