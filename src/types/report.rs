//! Bucketing result with summary totals for reporting

use super::bucket::{Bucket, BucketRequest, TimeRange};
use super::events::MarkerKind;
use super::visualisation::{get_marker_colour, PlotlyChart, PlotlyLayout, PlotlyTrace};
use serde::Serialize;

/// Outcome of an assignment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    pub placed_releases: usize,
    pub dropped_releases: usize,
    pub placed_flags: usize,
    pub dropped_flags: usize,
}

/// Buckets for one request plus how many input events were placed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketReport {
    pub range: TimeRange,
    pub desired_buckets: usize,
    pub buckets: Vec<Bucket>,
    pub total_releases: usize,
    pub total_flags: usize,
    pub placed_releases: usize,
    pub placed_flags: usize,
}

impl BucketReport {
    pub fn new(request: &BucketRequest, buckets: Vec<Bucket>, stats: AssignmentStats) -> Self {
        Self {
            range: request.range(),
            desired_buckets: request.desired_buckets,
            total_releases: stats.placed_releases + stats.dropped_releases,
            total_flags: stats.placed_flags + stats.dropped_flags,
            placed_releases: stats.placed_releases,
            placed_flags: stats.placed_flags,
            buckets,
        }
    }

    /// Events that fell outside `[min_time, final_time)`
    pub fn dropped_count(&self, kind: MarkerKind) -> usize {
        match kind {
            MarkerKind::Release => self.total_releases - self.placed_releases,
            MarkerKind::Flag => self.total_flags - self.placed_flags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Convert report to a grouped Plotly bar chart
    ///
    /// One trace per marker kind, x axis = bucket start.
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let x_values: Vec<String> = self.buckets.iter().map(|b| b.start_iso()).collect();

        let release_trace = PlotlyTrace::bar(
            x_values.clone(),
            self.buckets
                .iter()
                .map(|b| b.releases.len() as f64)
                .collect(),
            MarkerKind::Release.display_name(),
            get_marker_colour(MarkerKind::Release),
        )
        .with_text(
            self.buckets
                .iter()
                .map(|b| {
                    b.releases
                        .iter()
                        .map(|r| r.version.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect(),
        );

        let flag_trace = PlotlyTrace::bar(
            x_values,
            self.buckets.iter().map(|b| b.flags.len() as f64).collect(),
            MarkerKind::Flag.display_name(),
            get_marker_colour(MarkerKind::Flag),
        )
        .with_text(
            self.buckets
                .iter()
                .map(|b| {
                    b.flags
                        .iter()
                        .map(|f| f.flag.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect(),
        );

        let mut layout = PlotlyLayout::basic("Release Timeline", "Bucket Start", "Event Count")
            .with_legend("v", 1.02, 1.0, "left");
        layout.xaxis.axis_type = Some("date".to_string());
        layout.barmode = Some("group".to_string());

        PlotlyChart {
            data: vec![release_trace, flag_trace],
            layout,
        }
    }
}
