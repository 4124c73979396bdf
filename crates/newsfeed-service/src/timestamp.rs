use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Wire format for every timestamp the service reads or writes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("{0}")]
    Invalid(#[from] chrono::ParseError),

    #[error("expected zero-padded YYYY-MM-DDTHH:MM:SS")]
    NonCanonical,
}

/// A second-precision, timezone-less point in time.
///
/// Parsing accepts only [`TIMESTAMP_FORMAT`] with every field zero-padded, so a
/// parsed value always renders back to the exact input. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn parse(value: &str) -> Result<Self, TimestampError> {
        let parsed = Self(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?);
        // chrono also takes unpadded fields and a leading sign or space
        if parsed.to_string() != value {
            return Err(TimestampError::NonCanonical);
        }
        Ok(parsed)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|err| {
            serde::de::Error::custom(format!("malformed timestamp {raw:?}: {err}"))
        })
    }
}
