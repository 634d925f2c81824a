//! Event and request fixtures

use release_buckets::types::{BucketRequest, FlagChange, Release, TimeRange, Timestamp};

/// 2024-01-01 00:00:00 UTC in epoch milliseconds
pub const T: i64 = 1_704_067_200_000;

/// Range width used by the canonical 10-bucket scenario
pub const SCENARIO_SPAN_MS: i64 = 12_235;

pub fn release(version: &str, ts: i64) -> Release {
    Release::new(version, Timestamp::from_millis(ts))
}

pub fn flag(id: u64, name: &str, ts: i64) -> FlagChange {
    FlagChange::new(id, name, Timestamp::from_millis(ts))
}

/// `T .. T + 12235ms`, final time one minute after max, default bucket count
pub fn scenario_request() -> BucketRequest {
    BucketRequest::new(TimeRange::new(
        Some(T),
        Some(T + SCENARIO_SPAN_MS),
        T + SCENARIO_SPAN_MS + 60_000,
    ))
}

/// Releases spread across and around `[min, final)`
pub fn spread_releases(min: i64, final_time: i64, step: i64) -> Vec<Release> {
    ((min - 3 * step)..(final_time + 3 * step))
        .step_by(step as usize)
        .enumerate()
        .map(|(i, ts)| release(&format!("r{}", i), ts))
        .collect()
}
