//! Timeline state object
//!
//! Holds the current timeline inputs and the buckets computed from them.
//! Every successful input change recomputes the buckets, bumps the revision
//! and notifies subscribers in subscription order. A failed recomputation
//! leaves inputs and snapshot untouched.

use crate::bucketing::compute_buckets;
use crate::config::BucketingConfig;
use crate::errors::BucketResult;
use crate::types::{Bucket, BucketRequest, FlagChange, Release, TimeRange};
use tracing::debug;

/// Handle returned by [`TimelineStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TimelineSnapshot)>;

/// Buckets for the current inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineSnapshot {
    pub buckets: Vec<Bucket>,
    /// Incremented on every successful input change; 0 for the initial state
    pub revision: u64,
}

pub struct TimelineStore {
    request: BucketRequest,
    snapshot: TimelineSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TimelineStore {
    /// Create a store for `range` with no events
    ///
    /// The bucket count comes from `config`; the initial snapshot is computed
    /// immediately.
    pub fn new(config: &BucketingConfig, range: TimeRange) -> BucketResult<Self> {
        let request = BucketRequest::new(range).with_desired_buckets(config.desired_buckets);
        let buckets = compute_buckets(&request)?;

        Ok(Self {
            request,
            snapshot: TimelineSnapshot {
                buckets,
                revision: 0,
            },
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn current_state(&self) -> &TimelineSnapshot {
        &self.snapshot
    }

    pub fn range(&self) -> TimeRange {
        self.request.range()
    }

    pub fn desired_buckets(&self) -> usize {
        self.request.desired_buckets
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TimelineSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription; `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_range(&mut self, range: TimeRange) -> BucketResult<&TimelineSnapshot> {
        self.update(|request| {
            request.min_time = range.min_time;
            request.max_time = range.max_time;
            request.final_time = range.final_time;
        })
    }

    pub fn set_releases(&mut self, releases: Vec<Release>) -> BucketResult<&TimelineSnapshot> {
        self.update(|request| request.releases = releases)
    }

    pub fn set_flags(&mut self, flags: Vec<FlagChange>) -> BucketResult<&TimelineSnapshot> {
        self.update(|request| request.flags = flags)
    }

    pub fn set_desired_buckets(&mut self, desired: usize) -> BucketResult<&TimelineSnapshot> {
        self.update(|request| request.desired_buckets = desired)
    }

    fn update<F>(&mut self, change: F) -> BucketResult<&TimelineSnapshot>
    where
        F: FnOnce(&mut BucketRequest),
    {
        let mut next = self.request.clone();
        change(&mut next);
        let buckets = compute_buckets(&next)?;

        self.request = next;
        self.snapshot = TimelineSnapshot {
            buckets,
            revision: self.snapshot.revision + 1,
        };

        debug!(
            revision = self.snapshot.revision,
            buckets = self.snapshot.buckets.len(),
            subscribers = self.listeners.len(),
            "Timeline recomputed"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.snapshot);
        }

        Ok(&self.snapshot)
    }
}
