//! Report formatting and output generation
//!
//! Provides formatting for bucketing results via the [`ReportFormatter`] facade.
//! Supports Console, JSON, CSV, and Plotly output formats.

pub mod buckets;
pub mod utils;

use crate::errors::{AppError, AppResult};
use crate::types::BucketReport;
use std::str::FromStr;

/// Output format options for bucket reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Csv,
    Plotly,
}

impl OutputFormat {
    /// File extension used for default output paths
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Console => "txt",
            OutputFormat::Json | OutputFormat::Plotly => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Whether output is written to a file when no path is given
    pub fn writes_file_by_default(&self) -> bool {
        !matches!(self, OutputFormat::Console)
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "plotly" => Ok(OutputFormat::Plotly),
            other => Err(AppError::Config(format!(
                "Unknown output format '{}' (expected console, json, csv or plotly)",
                other
            ))),
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    // Buckets
    pub fn format_buckets(r: &BucketReport, f: &OutputFormat) -> AppResult<String> {
        buckets::format_buckets(r, f)
    }
    pub fn format_ranges(r: &BucketReport) -> String {
        buckets::format_ranges(r)
    }
}
