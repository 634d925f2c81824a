//! Bucket and time range types

use super::events::{FlagChange, Release};
use crate::utils::time::{millis_to_iso, EpochMillis};
use serde::{Deserialize, Serialize};

/// Default number of buckets a timeline is split into
pub const DEFAULT_DESIRED_BUCKETS: usize = 10;

/// Upper limit on the bucket count of a single request
pub const MAX_DESIRED_BUCKETS: usize = 1_000_000;

/// Time range a timeline covers
///
/// `min_time` / `max_time` are absent until the chart has data. `final_time`
/// is always concrete and only widens the last bucket (usually "now").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub min_time: Option<EpochMillis>,
    pub max_time: Option<EpochMillis>,
    pub final_time: EpochMillis,
}

impl TimeRange {
    pub fn new(
        min_time: Option<EpochMillis>,
        max_time: Option<EpochMillis>,
        final_time: EpochMillis,
    ) -> Self {
        Self {
            min_time,
            max_time,
            final_time,
        }
    }

    /// Range with both bounds present, ending "now" at `max_time`
    pub fn closed(min_time: EpochMillis, max_time: EpochMillis) -> Self {
        Self::new(Some(min_time), Some(max_time), max_time)
    }

    /// Concrete `(min, max)` if both bounds are known and distinct
    pub fn bounds(&self) -> Option<(EpochMillis, EpochMillis)> {
        match (self.min_time, self.max_time) {
            (Some(min), Some(max)) if min != max => Some((min, max)),
            _ => None,
        }
    }
}

/// One fixed-width interval of the timeline
///
/// Covers `[start, end)`. The last bucket of a sequence additionally carries
/// `final`, which replaces `end` as its effective upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub start: EpochMillis,
    pub end: EpochMillis,
    #[serde(rename = "final", default, skip_serializing_if = "Option::is_none")]
    pub final_time: Option<EpochMillis>,
    pub releases: Vec<Release>,
    pub flags: Vec<FlagChange>,
}

impl Bucket {
    pub fn new(start: EpochMillis, end: EpochMillis) -> Self {
        Self {
            start,
            end,
            final_time: None,
            releases: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Upper bound used for membership: `final` if set, else `end`
    pub fn effective_end(&self) -> EpochMillis {
        self.final_time.unwrap_or(self.end)
    }

    /// Half-open membership test against the effective end
    pub fn contains(&self, ts: EpochMillis) -> bool {
        ts >= self.start && ts < self.effective_end()
    }

    pub fn is_final(&self) -> bool {
        self.final_time.is_some()
    }

    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    pub fn event_count(&self) -> usize {
        self.releases.len() + self.flags.len()
    }

    pub fn start_iso(&self) -> String {
        millis_to_iso(self.start)
    }

    pub fn end_iso(&self) -> String {
        millis_to_iso(self.end)
    }
}

/// Input to a single bucketing pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRequest {
    #[serde(default)]
    pub min_time: Option<EpochMillis>,
    #[serde(default)]
    pub max_time: Option<EpochMillis>,
    pub final_time: EpochMillis,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub flags: Vec<FlagChange>,
    #[serde(default = "default_desired_buckets")]
    pub desired_buckets: usize,
}

fn default_desired_buckets() -> usize {
    DEFAULT_DESIRED_BUCKETS
}

impl BucketRequest {
    /// Request with no events and the default bucket count
    pub fn new(range: TimeRange) -> Self {
        Self {
            min_time: range.min_time,
            max_time: range.max_time,
            final_time: range.final_time,
            releases: Vec::new(),
            flags: Vec::new(),
            desired_buckets: DEFAULT_DESIRED_BUCKETS,
        }
    }

    pub fn with_releases(mut self, releases: Vec<Release>) -> Self {
        self.releases = releases;
        self
    }

    pub fn with_flags(mut self, flags: Vec<FlagChange>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_desired_buckets(mut self, desired_buckets: usize) -> Self {
        self.desired_buckets = desired_buckets;
        self
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.min_time, self.max_time, self.final_time)
    }
}
