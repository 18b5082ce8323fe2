//! Time-ordered identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A 64-bit identifier that increases monotonically over time.
///
/// The upper 42 bits carry the creation time in milliseconds since
/// [`DISCORD_EPOCH_MS`], so ordering identifiers orders entities by age.
///
/// # Examples
///
/// ```
/// use quill_core::Snowflake;
///
/// let older: Snowflake = "175928847299117063".parse().unwrap();
/// let newer = Snowflake::new(175928847299117064);
/// assert!(older < newer);
/// assert_eq!(older.to_string(), "175928847299117063");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Creation time encoded in the identifier.
    pub fn created_at(self) -> DateTime<Utc> {
        let millis = (self.0 >> 22) + DISCORD_EPOCH_MS;
        DateTime::from_timestamp_millis(millis as i64).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl FromStr for Snowflake {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}
