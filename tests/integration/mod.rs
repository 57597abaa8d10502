//! Integration tests for portal-rbac
//!
//! These tests drive the public API against the built-in registry
//! and test real system behavior without mocking.

pub mod admin_edit_tests;
pub mod authorization_tests;
