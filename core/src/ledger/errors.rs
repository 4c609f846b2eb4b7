use thiserror::Error;

use crate::address::AddressError;
use crate::commons::models::account::AccountDecodeError;
use crate::state::StateError;

/// Typed rejection of a submitted transaction. A rejected transaction leaves
/// the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransactionError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Account already exists")]
    AlreadyExists,
    #[error("Voter already voted on this subject")]
    AlreadyVoted,
    #[error("Voter has no vote to change")]
    NoExistingVote,
    #[error("Vote already has the requested direction")]
    NoOpChange,
    #[error("Subject not found")]
    SubjectNotFound,
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),
    #[error("Transaction already committed")]
    Replayed,
    #[error("Ledger account capacity exhausted")]
    InsufficientResources,
    #[error("Instruction address does not match its derivation")]
    AddressMismatch,
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

/// Failure to reach the ledger or to read from it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Ledger channel closed")]
    ChannelClosed,
    #[error("Unexpected ledger response")]
    UnexpectedResponse,
    #[error("A database error has ocurred at the ledger: \"{0}\"")]
    DatabaseError(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("A database error has ocurred at LedgerManager: \"{0}\"")]
    DatabaseError(String),
    #[error("Ledger log broken at entry {0}")]
    BrokenChain(u64),
    #[error("Ledger log hash failed: {0}")]
    HashError(String),
}

impl From<StateError> for TransactionError {
    fn from(error: StateError) -> Self {
        match error {
            StateError::AlreadyExists => TransactionError::AlreadyExists,
            StateError::AlreadyVoted => TransactionError::AlreadyVoted,
            StateError::NoExistingVote => TransactionError::NoExistingVote,
            StateError::NoOpChange => TransactionError::NoOpChange,
            StateError::Overflow | StateError::Underflow | StateError::RecordMismatch => {
                TransactionError::InvariantViolation(error.to_string())
            }
        }
    }
}

impl From<AddressError> for TransactionError {
    fn from(error: AddressError) -> Self {
        match error {
            AddressError::InvalidIdentifier(reason) => TransactionError::InvalidIdentifier(reason),
            AddressError::NoViableBump(_) => TransactionError::InvariantViolation(error.to_string()),
        }
    }
}

impl From<AccountDecodeError> for TransactionError {
    fn from(error: AccountDecodeError) -> Self {
        TransactionError::InvariantViolation(error.to_string())
    }
}

impl From<TransportError> for TransactionError {
    fn from(error: TransportError) -> Self {
        TransactionError::TransportFailure(error.to_string())
    }
}
