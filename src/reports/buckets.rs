//! Bucket report formatter
//!
//! Renders a [`BucketReport`] as console text, JSON, CSV or Plotly chart data.

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::{AppError, AppResult};
use crate::timeline::MarkerRegistry;
use crate::types::visualisation::PlotlyChart;
use crate::types::{BucketReport, MarkerKind};
use crate::utils::math::safe_percentage;
use crate::utils::time::{format_duration_millis, millis_to_iso};
use serde::Serialize;

/// One CSV row per bucket
#[derive(Debug, Serialize)]
struct BucketCsvRow {
    index: usize,
    start: String,
    end: String,
    #[serde(rename = "final")]
    final_time: String,
    release_count: usize,
    flag_count: usize,
    releases: String,
    flags: String,
}

/// Format a bucket report using the built-in marker labels
pub fn format_buckets(report: &BucketReport, format: &OutputFormat) -> AppResult<String> {
    format_buckets_with(report, format, &MarkerRegistry::with_defaults())
}

/// Format a bucket report; console output labels markers through `registry`
pub fn format_buckets_with(
    report: &BucketReport,
    format: &OutputFormat,
    registry: &MarkerRegistry,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => {
            let chart: PlotlyChart = report.to_plotly_chart();
            export_json(&chart)
        }
        OutputFormat::Csv => export_csv(report),
        OutputFormat::Console => Ok(format_console(report, registry)),
    }
}

/// Bucket boundaries only, one line per bucket
pub fn format_ranges(report: &BucketReport) -> String {
    let mut output = String::new();
    for (index, bucket) in report.buckets.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {}  {}",
            index,
            bucket.start_iso(),
            bucket.end_iso()
        ));
        if let Some(final_time) = bucket.final_time {
            output.push_str(&format!("  final {}", millis_to_iso(final_time)));
        }
        output.push('\n');
    }
    output
}

fn format_console(report: &BucketReport, registry: &MarkerRegistry) -> String {
    let mut output = String::new();

    // Header
    output.push_str("\n📊 Release Timeline Buckets\n");
    output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Handle empty report
    if report.is_empty() {
        output.push_str("No buckets: time range has no data or covers a single instant.\n");
        return output;
    }

    let first = &report.buckets[0];
    let last = &report.buckets[report.buckets.len() - 1];

    // Summary
    output.push_str(&format!(
        "Range: {} → {}\n",
        first.start_iso(),
        last.end_iso()
    ));
    output.push_str(&format!(
        "Final Bucket Ends: {}\n",
        millis_to_iso(last.effective_end())
    ));
    output.push_str(&format!(
        "Buckets: {} (width ~{})\n\n",
        format_number(report.buckets.len()),
        format_duration_millis(first.width().max(last.width()))
    ));

    for (kind, total, placed) in [
        (
            MarkerKind::Release,
            report.total_releases,
            report.placed_releases,
        ),
        (MarkerKind::Flag, report.total_flags, report.placed_flags),
    ] {
        output.push_str(&format!(
            "{:<14} {:>8} placed of {:>8} ({:.1}%), {} outside range\n",
            format!("{}:", kind.display_name()),
            format_number(placed),
            format_number(total),
            safe_percentage(placed, total),
            format_number(report.dropped_count(kind))
        ));
    }
    output.push('\n');

    // Per-bucket table
    output.push_str(&format!(
        "  {:>3}  {:<24}  {:<24}  {:>8}  {:>6}  {}\n",
        "#", "Start", "End", "Releases", "Flags", "Markers"
    ));
    output.push_str(&format!(
        "  {:->3}  {:-<24}  {:-<24}  {:->8}  {:->6}  {:-<7}\n",
        "", "", "", "", "", ""
    ));

    for (index, bucket) in report.buckets.iter().enumerate() {
        let marker = if bucket.is_final() { "*" } else { " " };
        output.push_str(&format!(
            "  {:>3}{} {:<24}  {:<24}  {:>8}  {:>6}  {}\n",
            index,
            marker,
            bucket.start_iso(),
            bucket.end_iso(),
            format_number(bucket.releases.len()),
            format_number(bucket.flags.len()),
            registry.all_labels(bucket).join("; ")
        ));
    }
    output.push('\n');

    output.push_str("Note: * final bucket extends to the final time shown above.\n");
    output.push_str("      For full bucket contents, use --format json\n");
    output.push_str("      For chart data, use --format plotly\n");

    output
}

fn export_csv(report: &BucketReport) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for (index, bucket) in report.buckets.iter().enumerate() {
        writer.serialize(BucketCsvRow {
            index,
            start: bucket.start_iso(),
            end: bucket.end_iso(),
            final_time: bucket.final_time.map(millis_to_iso).unwrap_or_default(),
            release_count: bucket.releases.len(),
            flag_count: bucket.flags.len(),
            releases: bucket
                .releases
                .iter()
                .map(|r| r.version.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            flags: bucket
                .flags
                .iter()
                .map(|f| f.flag.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InvalidData(format!("CSV export failed: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::InvalidData(format!("CSV export failed: {}", e)))
}
