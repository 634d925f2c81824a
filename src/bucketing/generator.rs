//! Bucket generation
//!
//! Splits `[min_time, max_time]` into equal-width, contiguous buckets. The
//! last bucket is tagged with the range's `final_time`.

use crate::errors::{BucketError, BucketResult};
use crate::types::{Bucket, TimeRange, MAX_DESIRED_BUCKETS};
use crate::utils::math::division_boundary;
use tracing::debug;

/// Generate `desired_buckets` empty buckets covering `range`
///
/// Returns an empty sequence when either bound is missing or both bounds are
/// equal. Errors on a bucket count outside `1..=MAX_DESIRED_BUCKETS` or an
/// inverted range.
pub fn generate_buckets(range: &TimeRange, desired_buckets: usize) -> BucketResult<Vec<Bucket>> {
    if desired_buckets == 0 || desired_buckets > MAX_DESIRED_BUCKETS {
        return Err(BucketError::InvalidBucketCount {
            desired: desired_buckets,
        });
    }

    let Some((min_time, max_time)) = range.bounds() else {
        debug!(
            min_time = ?range.min_time,
            max_time = ?range.max_time,
            "Degenerate time range, no buckets generated"
        );
        return Ok(Vec::new());
    };

    if min_time > max_time {
        return Err(BucketError::InvertedRange { min_time, max_time });
    }

    let boundaries: Vec<i64> = (0..=desired_buckets)
        .map(|i| division_boundary(min_time, max_time, i, desired_buckets))
        .collect();

    let mut buckets: Vec<Bucket> = boundaries
        .windows(2)
        .map(|edge| Bucket::new(edge[0], edge[1]))
        .collect();

    if let Some(last) = buckets.last_mut() {
        last.final_time = Some(range.final_time);
    }

    debug!(
        min_time,
        max_time,
        final_time = range.final_time,
        count = buckets.len(),
        "Generated buckets"
    );

    Ok(buckets)
}
