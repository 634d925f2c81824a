//! Event assignment
//!
//! Places each release and flag change into the bucket whose half-open
//! interval `[start, effective_end)` contains its timestamp. Events outside
//! every bucket are dropped. Order within a bucket follows input order.

use crate::types::{AssignmentStats, Bucket, FlagChange, Release, Timestamped};
use crate::utils::time::EpochMillis;
use tracing::debug;

/// Index of the bucket containing `ts`, if any
///
/// Binary search over bucket starts. Buckets must be sorted and contiguous,
/// as produced by [`generate_buckets`](super::generate_buckets). When several
/// zero-width buckets share a start, the last of them is the only candidate
/// that can hold a timestamp.
pub fn find_bucket_index(buckets: &[Bucket], ts: EpochMillis) -> Option<usize> {
    let candidate = buckets.partition_point(|b| b.start <= ts).checked_sub(1)?;
    buckets[candidate].contains(ts).then_some(candidate)
}

/// Assign releases and flag changes into `buckets`
pub fn assign_events(
    buckets: &mut [Bucket],
    releases: &[Release],
    flags: &[FlagChange],
) -> AssignmentStats {
    let (placed_releases, dropped_releases) =
        place_events(buckets, releases, |bucket| &mut bucket.releases);
    let (placed_flags, dropped_flags) = place_events(buckets, flags, |bucket| &mut bucket.flags);

    let stats = AssignmentStats {
        placed_releases,
        dropped_releases,
        placed_flags,
        dropped_flags,
    };
    debug!(?stats, "Assigned events to buckets");
    stats
}

/// Place each event into its bucket's `slot`; returns `(placed, dropped)`
fn place_events<T, F>(buckets: &mut [Bucket], events: &[T], slot: F) -> (usize, usize)
where
    T: Timestamped + Clone,
    F: Fn(&mut Bucket) -> &mut Vec<T>,
{
    let mut placed = 0;
    for event in events {
        if let Some(index) = find_bucket_index(buckets, event.timestamp_ms()) {
            slot(&mut buckets[index]).push(event.clone());
            placed += 1;
        }
    }
    (placed, events.len() - placed)
}
