use super::resolve_format;
use crate::bucketing::compute_report;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::reports::{OutputFormat, ReportFormatter};
use crate::types::{BucketRequest, TimeRange, Timestamp};
use clap::Args;
use tracing::info;

/// Print bucket boundaries without any events
#[derive(Args)]
pub struct RangesCommand {
    /// Range start (ISO 8601 or epoch milliseconds)
    #[arg(long)]
    min_time: Timestamp,

    /// Range end (ISO 8601 or epoch milliseconds)
    #[arg(long)]
    max_time: Timestamp,

    /// Effective end of the last bucket (defaults to max-time)
    #[arg(long)]
    final_time: Option<Timestamp>,

    /// Number of buckets (overrides config.toml)
    #[arg(long)]
    buckets: Option<usize>,

    /// Output format (console, json, csv or plotly); console prints boundaries only
    #[arg(long)]
    format: Option<String>,
}

impl RangesCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let final_time = self.final_time.unwrap_or(self.max_time);
        let range = TimeRange::new(
            Some(self.min_time.millis()),
            Some(self.max_time.millis()),
            final_time.millis(),
        );
        let request = BucketRequest::new(range)
            .with_desired_buckets(self.buckets.unwrap_or(app_config.bucketing.desired_buckets));

        info!(?range, desired = request.desired_buckets, "Computing bucket ranges");
        let report = compute_report(&request)?;

        let output = match resolve_format(&self.format, app_config)? {
            OutputFormat::Console => ReportFormatter::format_ranges(&report),
            other => ReportFormatter::format_buckets(&report, &other)?,
        };
        print!("{}", output);
        Ok(())
    }
}
