//! Shared helpers used across the bucketing engine, reports and CLI

pub mod math;
pub mod time;
