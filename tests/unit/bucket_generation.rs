//! Unit tests for bucket generation
//!
//! Covers bucket counts, boundary placement and the degenerate-range policy.

use crate::common::assertion_helpers::assert_bucket_structure;
use crate::common::fixtures::{scenario_request, SCENARIO_SPAN_MS, T};
use release_buckets::bucketing::{compute_buckets, generate_buckets};
use release_buckets::errors::{BucketError, BucketResult};
use release_buckets::types::{BucketRequest, TimeRange, DEFAULT_DESIRED_BUCKETS};

#[test]
fn test_default_scenario_has_ten_buckets() -> BucketResult<()> {
    let request = scenario_request();
    let buckets = compute_buckets(&request)?;

    assert_eq!(request.desired_buckets, DEFAULT_DESIRED_BUCKETS);
    assert_eq!(buckets.len(), 10);
    assert_bucket_structure(&buckets, request.final_time);

    Ok(())
}

#[test]
fn test_default_scenario_boundaries() -> BucketResult<()> {
    let buckets = compute_buckets(&scenario_request())?;

    let offsets: Vec<i64> = buckets.iter().map(|b| b.start - T).collect();
    assert_eq!(
        offsets,
        vec![0, 1_223, 2_447, 3_670, 4_894, 6_117, 7_341, 8_564, 9_788, 11_011]
    );
    assert_eq!(buckets[0].end, T + 1_223);
    assert_eq!(buckets[9].end, T + SCENARIO_SPAN_MS);

    Ok(())
}

#[test]
fn test_count_matches_request_for_many_sizes() -> BucketResult<()> {
    for desired in 1..=50 {
        for span in [1_i64, 7, 999, 86_400_000, 31_536_000_000] {
            let range = TimeRange::new(Some(T), Some(T + span), T + span + 1);
            let buckets = generate_buckets(&range, desired)?;
            assert_eq!(buckets.len(), desired, "span {} desired {}", span, desired);
            assert_eq!(buckets[0].start, T);
            assert_eq!(buckets[desired - 1].end, T + span);
            assert_bucket_structure(&buckets, range.final_time);
        }
    }
    Ok(())
}

#[test]
fn test_equal_bounds_give_zero_buckets_for_any_count() -> BucketResult<()> {
    for desired in [1, 10, 100] {
        let request = BucketRequest::new(TimeRange::new(Some(T), Some(T), T + 5))
            .with_desired_buckets(desired);
        assert!(compute_buckets(&request)?.is_empty());
    }
    Ok(())
}

#[test]
fn test_missing_bounds_give_zero_buckets() -> BucketResult<()> {
    for range in [
        TimeRange::new(None, Some(T), T),
        TimeRange::new(Some(T), None, T),
        TimeRange::new(None, None, T),
    ] {
        assert!(compute_buckets(&BucketRequest::new(range))?.is_empty());
    }
    Ok(())
}

#[test]
fn test_zero_desired_buckets_is_a_contract_violation() {
    let request = scenario_request().with_desired_buckets(0);
    assert_eq!(
        compute_buckets(&request).unwrap_err(),
        BucketError::InvalidBucketCount { desired: 0 }
    );
}

#[test]
fn test_inverted_range_is_a_contract_violation() {
    let request = BucketRequest::new(TimeRange::new(Some(T + 1), Some(T), T + 2));
    assert!(matches!(
        compute_buckets(&request),
        Err(BucketError::InvertedRange { .. })
    ));
}
