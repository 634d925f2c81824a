//! Marker label registry
//!
//! Maps each [`MarkerKind`] to an ordered list of label handlers. Handlers are
//! registered once when the registry is composed and run in registration
//! order for every bucket being rendered.

use crate::types::{Bucket, MarkerKind};
use std::collections::BTreeMap;

/// Produces an optional label for a bucket
pub type LabelHandler = Box<dyn Fn(&Bucket) -> Option<String>>;

/// Names listed in a default label before collapsing to "+N more"
const MAX_LISTED_NAMES: usize = 3;

#[derive(Default)]
pub struct MarkerRegistry {
    handlers: BTreeMap<MarkerKind, Vec<LabelHandler>>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in release and flag summaries
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(MarkerKind::Release, |bucket| {
                summarise(
                    bucket.releases.iter().map(|r| r.version.as_str()),
                    "release",
                )
            })
            .register(MarkerKind::Flag, |bucket| {
                summarise(bucket.flags.iter().map(|f| f.flag.as_str()), "flag change")
            });
        registry
    }

    /// Append a handler for `kind`
    pub fn register<F>(&mut self, kind: MarkerKind, handler: F) -> &mut Self
    where
        F: Fn(&Bucket) -> Option<String> + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
        self
    }

    pub fn handler_count(&self, kind: MarkerKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Labels produced for `bucket` by the handlers of `kind`, in order
    pub fn labels_for(&self, kind: MarkerKind, bucket: &Bucket) -> Vec<String> {
        self.handlers
            .get(&kind)
            .map(|handlers| handlers.iter().filter_map(|h| h(bucket)).collect())
            .unwrap_or_default()
    }

    /// Labels of every kind, kinds in declaration order
    pub fn all_labels(&self, bucket: &Bucket) -> Vec<String> {
        self.handlers
            .keys()
            .flat_map(|kind| self.labels_for(*kind, bucket))
            .collect()
    }
}

/// "2 releases: 1.0.0, 1.0.1" style summary, `None` when there are no names
fn summarise<'a>(names: impl ExactSizeIterator<Item = &'a str>, noun: &str) -> Option<String> {
    let count = names.len();
    if count == 0 {
        return None;
    }

    let listed: Vec<&str> = names.take(MAX_LISTED_NAMES).collect();
    let more = count.saturating_sub(MAX_LISTED_NAMES);
    let suffix = if more > 0 {
        format!(" +{} more", more)
    } else {
        String::new()
    };
    let plural = if count == 1 { "" } else { "s" };

    Some(format!(
        "{} {}{}: {}{}",
        count,
        noun,
        plural,
        listed.join(", "),
        suffix
    ))
}
