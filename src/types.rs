//! Release Timeline Bucketing - Type System
//!
//! - `events`: Timestamped events (releases, flag changes) and their wire formats
//! - `bucket`: Buckets, time ranges and bucketing requests
//! - `report`: Bucketing results with totals, Plotly conversion
//! - `visualisation`: Plotly chart types

mod bucket;
mod events;
mod report;
pub mod visualisation;

pub use bucket::*;
pub use events::*;
pub use report::*;
