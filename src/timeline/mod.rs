//! Timeline composition: a subscribable state object over the bucketing
//! engine, and the registry that labels bucket markers.

pub mod registry;
pub mod store;

pub use registry::{LabelHandler, MarkerRegistry};
pub use store::{SubscriptionId, TimelineSnapshot, TimelineStore};
