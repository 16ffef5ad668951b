//! Unit tests for the menu subsystem.

mod contribution_tests;
