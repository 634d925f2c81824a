//! Point-in-time events plotted on the bucketed timeline
//!
//! Only the timestamp matters for bucketing; every other field is carried
//! through untouched so reports can label markers.

use crate::errors::BucketError;
use crate::utils::time::{checked_millis, millis_to_iso, parse_timestamp, EpochMillis};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Anything that can be placed on the timeline
pub trait Timestamped {
    /// Event time in epoch milliseconds (UTC)
    fn timestamp_ms(&self) -> EpochMillis;
}

/// Kind of marker an event is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Release,
    Flag,
}

impl MarkerKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            MarkerKind::Release => "Releases",
            MarkerKind::Flag => "Flag Changes",
        }
    }
}

/// Event timestamp in epoch milliseconds
///
/// Deserializes from either an ISO 8601 string or an integer epoch-ms value;
/// values outside chrono's representable range are rejected. Always serializes as an RFC 3339 string with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(EpochMillis);

impl Timestamp {
    pub fn from_millis(millis: EpochMillis) -> Self {
        Self(millis)
    }

    pub fn millis(&self) -> EpochMillis {
        self.0
    }

    pub fn to_iso(&self) -> String {
        millis_to_iso(self.0)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s).map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

/// Wire forms accepted for a timestamp
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(millis) => checked_millis(millis)
                .map(Self)
                .map_err(serde::de::Error::custom),
            RawTimestamp::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// A software release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub date: Timestamp,
}

impl Release {
    pub fn new(version: &str, date: Timestamp) -> Self {
        Self {
            version: version.to_string(),
            date,
        }
    }
}

impl Timestamped for Release {
    fn timestamp_ms(&self) -> EpochMillis {
        self.date.millis()
    }
}

/// A feature-flag change
///
/// Fields beyond `id`, `flag` and `createdAt` are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagChange {
    pub id: u64,
    pub flag: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FlagChange {
    pub fn new(id: u64, flag: &str, created_at: Timestamp) -> Self {
        Self {
            id,
            flag: flag.to_string(),
            created_at,
            extra: serde_json::Map::new(),
        }
    }
}

impl Timestamped for FlagChange {
    fn timestamp_ms(&self) -> EpochMillis {
        self.created_at.millis()
    }
}
