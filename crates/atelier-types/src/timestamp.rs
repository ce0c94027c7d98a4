use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Fixed-width sortable timestamp string in `YYYYMMDDHHmmss` form.
///
/// Lexicographic order equals chronological order, which is what lets the
/// stores sort records by comparing raw strings and lets identifiers embed
/// their creation time as a sortable prefix.
///
/// Granularity is one second. Two timestamps taken within the same second
/// compare equal; identifier collisions that follow from this are documented
/// behavior of the record store, not of this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

/// Expected number of digits in a well-formed timestamp.
const TIMESTAMP_WIDTH: usize = 14;

impl Timestamp {
    /// The current wall-clock time in UTC.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Build a timestamp from an explicit UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.format("%Y%m%d%H%M%S").to_string())
    }

    /// Parse a timestamp string, requiring exactly 14 ASCII digits.
    ///
    /// Stored records are deserialized leniently (any string is accepted so
    /// that old or hand-edited files still load); `parse` is for callers that
    /// need the well-formed guarantee up front.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.len() != TIMESTAMP_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidTimestamp(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The raw timestamp string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty (absent) timestamp.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The four-digit year prefix, or `None` when the timestamp is absent or
    /// too short to carry one.
    pub fn year(&self) -> Option<&str> {
        // Lenient deserialization means the string can be anything; a
        // non-boundary byte slice must yield None, not a panic.
        self.0.get(..4)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Self(s)
    }
}
