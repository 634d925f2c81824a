//! Unit tests for the timeline store and marker registry
//!
//! Drives the store the way a chart component would: range first, then
//! events as they load, reading snapshots through a subscription.

use crate::common::fixtures::{flag, release, T};
use release_buckets::config::BucketingConfig;
use release_buckets::errors::BucketResult;
use release_buckets::timeline::{MarkerRegistry, TimelineStore};
use release_buckets::types::{MarkerKind, TimeRange};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_store_follows_loading_sequence() -> BucketResult<()> {
    let config = BucketingConfig::default();
    let mut store = TimelineStore::new(&config, TimeRange::new(None, None, T))?;
    assert!(store.current_state().buckets.is_empty());

    let latest_counts: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&latest_counts);
    store.subscribe(move |snapshot| {
        *sink.borrow_mut() = snapshot.buckets.iter().map(|b| b.event_count()).collect();
    });

    store.set_range(TimeRange::new(Some(T), Some(T + 10_000), T + 15_000))?;
    assert_eq!(latest_counts.borrow().len(), 10);
    assert!(latest_counts.borrow().iter().all(|c| *c == 0));

    store.set_releases(vec![release("1.0.0", T + 500), release("1.0.1", T + 12_000)])?;
    store.set_flags(vec![flag(1, "beta", T + 500)])?;

    let counts = latest_counts.borrow().clone();
    assert_eq!(counts[0], 2);
    assert_eq!(counts[9], 1);
    assert_eq!(store.current_state().revision, 3);

    Ok(())
}

#[test]
fn test_registry_labels_store_snapshot() -> BucketResult<()> {
    let mut store = TimelineStore::new(
        &BucketingConfig { desired_buckets: 2 },
        TimeRange::closed(T, T + 1_000),
    )?;
    let snapshot = store.set_releases(vec![
        release("3.1.0", T),
        release("3.1.1", T + 10),
        release("3.2.0", T + 600),
    ])?;

    let registry = MarkerRegistry::with_defaults();
    assert_eq!(
        registry.labels_for(MarkerKind::Release, &snapshot.buckets[0]),
        vec!["2 releases: 3.1.0, 3.1.1".to_string()]
    );
    assert!(registry
        .labels_for(MarkerKind::Flag, &snapshot.buckets[0])
        .is_empty());

    Ok(())
}
