use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Nanoseconds since the Unix epoch, UTC.
#[derive(
    Debug,
    Clone,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
    BorshSerialize,
    BorshDeserialize,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TimeStamp {
    pub time: u64,
}

impl TimeStamp {
    pub fn now() -> Self {
        Self {
            time: OffsetDateTime::now_utc().unix_timestamp_nanos() as u64,
        }
    }
}
