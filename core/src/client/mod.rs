//! Orchestration of the rating operations on top of a ledger handle.

mod client;
mod error;

pub use client::{RatingClient, VoteReceipt};
pub use error::ClientError;
