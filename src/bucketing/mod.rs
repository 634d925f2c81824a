//! Time bucketing engine
//!
//! Partitions a chart's time range into a fixed number of equal-width
//! buckets and assigns releases and feature-flag changes into the bucket
//! whose interval contains their timestamp.
//!
//! ## Key Design Decisions
//!
//! - **Half-open intervals**: a bucket covers `[start, end)`; a timestamp on a
//!   boundary belongs to the later bucket
//! - **Widened final bucket**: the last bucket's effective end is the range's
//!   `final_time` (usually "now"), so events at or after `max_time` fold into it
//! - **Exact integer boundaries**: boundary `i` is
//!   `min + floor((max - min) * i / n)`, first at `min`, last at `max`
//! - **Degenerate ranges**: missing or equal bounds yield no buckets, not an error
//!
//! ## Usage
//!
//! ```rust
//! use release_buckets::bucketing::compute_buckets;
//! use release_buckets::types::{BucketRequest, Release, TimeRange, Timestamp};
//!
//! let request = BucketRequest::new(TimeRange::new(Some(0), Some(1_000), 1_500))
//!     .with_releases(vec![Release::new("1.0.0", Timestamp::from_millis(1_200))]);
//!
//! let buckets = compute_buckets(&request).unwrap();
//! assert_eq!(buckets.len(), 10);
//! assert_eq!(buckets[9].releases.len(), 1);
//! ```

pub mod assignment;
pub mod generator;

pub use assignment::{assign_events, find_bucket_index};
pub use generator::generate_buckets;

use crate::errors::BucketResult;
use crate::types::{AssignmentStats, Bucket, BucketReport, BucketRequest};
use tracing::info;

/// Generate buckets for the request's range and fill them with its events
pub fn compute_buckets(request: &BucketRequest) -> BucketResult<Vec<Bucket>> {
    bucket_events(request).map(|(buckets, _)| buckets)
}

/// Compute buckets and wrap them with placement totals
pub fn compute_report(request: &BucketRequest) -> BucketResult<BucketReport> {
    let (buckets, stats) = bucket_events(request)?;
    let report = BucketReport::new(request, buckets, stats);

    info!(
        buckets = report.buckets.len(),
        placed_releases = report.placed_releases,
        placed_flags = report.placed_flags,
        "Bucketing complete"
    );

    Ok(report)
}

/// With no buckets every event counts as dropped
fn bucket_events(request: &BucketRequest) -> BucketResult<(Vec<Bucket>, AssignmentStats)> {
    let mut buckets = generate_buckets(&request.range(), request.desired_buckets)?;
    let stats = assign_events(&mut buckets, &request.releases, &request.flags);
    Ok((buckets, stats))
}
