//! Common Test Utilities
//!
//! Shared fixtures and assertion helpers used across all test files.

pub mod fixtures;
