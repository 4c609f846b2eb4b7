//! Read-only statistics derived from a subject snapshot.

use serde::{Deserialize, Serialize};

use crate::commons::models::account::SubjectAccount;

/// Counts and whole-number percentages of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub name: String,
    pub approve_count: u64,
    pub disapprove_count: u64,
    pub total_votes: u128,
    pub approve_percentage: u8,
    pub disapprove_percentage: u8,
}

impl Stats {
    /// Stats of a subject nobody has created or voted on.
    pub fn empty<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            approve_count: 0,
            disapprove_count: 0,
            total_votes: 0,
            approve_percentage: 0,
            disapprove_percentage: 0,
        }
    }
}

/// Percentages are rounded half up and always add to 100 when there is at
/// least one vote.
pub fn compute_stats(subject: &SubjectAccount) -> Stats {
    let total = subject.total_votes();
    if total == 0 {
        return Stats::empty(subject.identifier.clone());
    }
    let approve_percentage = approve_percentage(subject.approve_count as u128, total);
    Stats {
        name: subject.identifier.clone(),
        approve_count: subject.approve_count,
        disapprove_count: subject.disapprove_count,
        total_votes: total,
        approve_percentage,
        disapprove_percentage: 100 - approve_percentage,
    }
}

// round(100 * a / t) == floor((200 * a + t) / (2 * t))
fn approve_percentage(approve: u128, total: u128) -> u8 {
    ((200 * approve + total) / (2 * total)) as u8
}
