//! Persisted account records and their on-ledger layout.
//!
//! Every account is stored as one layout version byte followed by the borsh
//! encoding of [`Account`]. The borsh variant index is the account
//! discriminator. Changing any record requires a new [`LAYOUT_VERSION`] and a
//! migration branch in [`Account::decode`].

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commons::identifier::{Address, KeyIdentifier};

pub const LAYOUT_VERSION: u8 = 1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountDecodeError {
    #[error("Account data is empty")]
    Empty,
    #[error("Unsupported layout version {0}")]
    UnsupportedLayoutVersion(u8),
    #[error("Corrupt account data: {0}")]
    Corrupt(String),
    #[error("Expected a {expected} account")]
    UnexpectedKind { expected: &'static str },
    #[error("Serialization with Borsh fails")]
    EncodeFailed,
}

/// One named entity and its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct SubjectAccount {
    pub identifier: String,
    pub approve_count: u64,
    pub disapprove_count: u64,
}

impl SubjectAccount {
    pub fn total_votes(&self) -> u128 {
        self.approve_count as u128 + self.disapprove_count as u128
    }
}

/// Current opinion of one voter about one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct VoteRecordAccount {
    pub subject: Address,
    pub voter: KeyIdentifier,
    pub has_voted: bool,
    pub approve: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum Account {
    Subject(SubjectAccount),
    VoteRecord(VoteRecordAccount),
}

impl Account {
    pub fn encode(&self) -> Result<Vec<u8>, AccountDecodeError> {
        let mut bytes = vec![LAYOUT_VERSION];
        BorshSerialize::serialize(self, &mut bytes)
            .map_err(|_| AccountDecodeError::EncodeFailed)?;
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, AccountDecodeError> {
        let (version, body) = bytes.split_first().ok_or(AccountDecodeError::Empty)?;
        match *version {
            LAYOUT_VERSION => Account::try_from_slice(body)
                .map_err(|e| AccountDecodeError::Corrupt(e.to_string())),
            other => Err(AccountDecodeError::UnsupportedLayoutVersion(other)),
        }
    }

    pub fn into_subject(self) -> Result<SubjectAccount, AccountDecodeError> {
        match self {
            Account::Subject(subject) => Ok(subject),
            Account::VoteRecord(_) => Err(AccountDecodeError::UnexpectedKind {
                expected: "subject",
            }),
        }
    }

    pub fn into_vote_record(self) -> Result<VoteRecordAccount, AccountDecodeError> {
        match self {
            Account::VoteRecord(record) => Ok(record),
            Account::Subject(_) => Err(AccountDecodeError::UnexpectedKind {
                expected: "vote record",
            }),
        }
    }
}

impl From<SubjectAccount> for Account {
    fn from(subject: SubjectAccount) -> Self {
        Account::Subject(subject)
    }
}

impl From<VoteRecordAccount> for Account {
    fn from(record: VoteRecordAccount) -> Self {
        Account::VoteRecord(record)
    }
}
