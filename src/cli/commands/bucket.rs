use super::{emit_output, resolve_format};
use crate::bucketing::compute_report;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::reports::ReportFormatter;
use crate::types::{BucketRequest, FlagChange, Release, Timestamp};
use crate::utils::time::now_millis;
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timeline request file
///
/// Same shape as [`BucketRequest`], but every range field is optional and
/// accepts ISO 8601 strings as well as epoch milliseconds.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInput {
    #[serde(default)]
    pub min_time: Option<Timestamp>,
    #[serde(default)]
    pub max_time: Option<Timestamp>,
    #[serde(default)]
    pub final_time: Option<Timestamp>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub flags: Vec<FlagChange>,
    #[serde(default)]
    pub desired_buckets: Option<usize>,
}

impl TimelineInput {
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Bucket releases and flag changes from a JSON request file
#[derive(Args)]
pub struct BucketCommand {
    /// Path to the timeline request JSON file
    #[arg(long)]
    input: PathBuf,

    /// Range start, overrides the file (ISO 8601 or epoch milliseconds)
    #[arg(long)]
    min_time: Option<Timestamp>,

    /// Range end, overrides the file (ISO 8601 or epoch milliseconds)
    #[arg(long)]
    max_time: Option<Timestamp>,

    /// Effective end of the last bucket, overrides the file (defaults to now)
    #[arg(long)]
    final_time: Option<Timestamp>,

    /// Number of buckets (overrides the file and config.toml)
    #[arg(long)]
    buckets: Option<usize>,

    /// Output format (console, json, csv or plotly)
    #[arg(long)]
    format: Option<String>,

    /// Output file path (JSON/CSV/Plotly default to the configured plots directory)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl BucketCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        info!("Loading timeline request from {}", self.input.display());
        let input = TimelineInput::from_file(&self.input)?;
        let request = self.build_request(input, app_config);

        info!(
            releases = request.releases.len(),
            flags = request.flags.len(),
            desired = request.desired_buckets,
            "Bucketing timeline"
        );
        let report = compute_report(&request)?;

        let format = resolve_format(&self.format, app_config)?;
        let formatted_output = ReportFormatter::format_buckets(&report, &format)?;

        emit_output(
            &formatted_output,
            format,
            &self.output,
            "release_buckets",
            "Bucket report",
            app_config,
        )
    }

    /// CLI arguments override the request file, which overrides config values
    fn build_request(&self, input: TimelineInput, app_config: &AppConfig) -> BucketRequest {
        let final_time = self
            .final_time
            .or(input.final_time)
            .map(|ts| ts.millis())
            .unwrap_or_else(now_millis);

        BucketRequest {
            min_time: self.min_time.or(input.min_time).map(|ts| ts.millis()),
            max_time: self.max_time.or(input.max_time).map(|ts| ts.millis()),
            final_time,
            releases: input.releases,
            flags: input.flags,
            desired_buckets: self
                .buckets
                .or(input.desired_buckets)
                .unwrap_or(app_config.bucketing.desired_buckets),
        }
    }
}
