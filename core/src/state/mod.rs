//! Subject and vote record state machines.
//!
//! Transitions are pure: they take the current accounts and return the next
//! ones, so the caller decides when (and whether) to commit them.

mod error;
mod subject;
mod vote_record;

pub use error::StateError;
pub use subject::create_subject;
pub use vote_record::{cast_vote, change_vote, has_voted, VoteStatus};
