//! Unit tests for the formatting subsystem.
