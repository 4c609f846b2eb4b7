use serde::{Deserialize, Serialize};

use super::error::StateError;
use crate::commons::identifier::{Address, KeyIdentifier};
use crate::commons::models::account::{SubjectAccount, VoteRecordAccount};

/// Whether a voter has an opinion recorded on a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStatus {
    pub has_voted: bool,
    pub approve: Option<bool>,
}

impl VoteStatus {
    pub fn no_vote() -> Self {
        Self {
            has_voted: false,
            approve: None,
        }
    }
}

/// `NoVote -> Voted(approve)`. Returns the updated subject and the new record;
/// the inputs are left untouched so a rejection has no effect.
pub fn cast_vote(
    subject: &SubjectAccount,
    existing: Option<&VoteRecordAccount>,
    subject_address: Address,
    voter: &KeyIdentifier,
    approve: bool,
) -> Result<(SubjectAccount, VoteRecordAccount), StateError> {
    if existing.is_some() {
        return Err(StateError::AlreadyVoted);
    }
    let mut subject = subject.clone();
    subject.record(approve)?;
    let record = VoteRecordAccount {
        subject: subject_address,
        voter: voter.clone(),
        has_voted: true,
        approve,
    };
    Ok((subject, record))
}

/// `Voted(x) -> Voted(!x)`. The old side is decremented and the new side
/// incremented as one unit.
pub fn change_vote(
    subject: &SubjectAccount,
    existing: Option<&VoteRecordAccount>,
    subject_address: &Address,
    voter: &KeyIdentifier,
    new_approve: bool,
) -> Result<(SubjectAccount, VoteRecordAccount), StateError> {
    let record = match existing {
        Some(record) if record.has_voted => record,
        _ => return Err(StateError::NoExistingVote),
    };
    if &record.subject != subject_address || &record.voter != voter {
        return Err(StateError::RecordMismatch);
    }
    if record.approve == new_approve {
        return Err(StateError::NoOpChange);
    }
    let mut subject = subject.clone();
    subject.reverse(record.approve)?;
    subject.record(new_approve)?;
    let mut record = record.clone();
    record.approve = new_approve;
    Ok((subject, record))
}

pub fn has_voted(existing: Option<&VoteRecordAccount>) -> VoteStatus {
    match existing {
        Some(record) if record.has_voted => VoteStatus {
            has_voted: true,
            approve: Some(record.approve),
        },
        _ => VoteStatus::no_vote(),
    }
}
