//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use release_buckets::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::InvalidData(format!("JSON export failed: {}", e)))
}
