//! Release Timeline Bucketing
//!
//! Splits a chart's time range into equal-width buckets and places software
//! releases and feature-flag changes into them for timeline rendering.

pub mod bucketing;
pub mod cli;
pub mod config;
pub mod errors;
pub mod reports;
pub mod timeline;
pub mod types;
pub mod utils;

pub use bucketing::{compute_buckets, compute_report};
pub use errors::{AppError, AppResult, BucketError, BucketResult};
