use thiserror::Error;

use crate::address::AddressError;
use crate::commons::errors::SignatureError;
use crate::commons::models::account::AccountDecodeError;
use crate::ledger::errors::{TransactionError, TransportError};

/// Errors surfaced to the presentation layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Subject already exists")]
    AlreadyExists,
    #[error("Already voted on this subject")]
    AlreadyVoted,
    #[error("No vote to change")]
    NoExistingVote,
    #[error("Vote already has that direction")]
    NoOpChange,
    #[error("Subject not found")]
    SubjectNotFound,
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),
    #[error("Ledger has no room for new accounts")]
    InsufficientResources,
    #[error("Transport failure: {0}")]
    TransportFailure(String),
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error("Sign error: {0}")]
    SignError(String),
}

impl ClientError {
    /// The same request may succeed if sent again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::TransportFailure(_))
    }

    /// Lost a race against an equivalent write; callers may treat it as success.
    pub fn is_benign(&self) -> bool {
        matches!(self, ClientError::AlreadyExists | ClientError::AlreadyVoted)
    }
}

impl From<TransactionError> for ClientError {
    fn from(error: TransactionError) -> Self {
        match error {
            TransactionError::InvalidIdentifier(reason) => ClientError::InvalidIdentifier(reason),
            TransactionError::AlreadyExists => ClientError::AlreadyExists,
            TransactionError::AlreadyVoted => ClientError::AlreadyVoted,
            TransactionError::NoExistingVote => ClientError::NoExistingVote,
            TransactionError::NoOpChange => ClientError::NoOpChange,
            TransactionError::SubjectNotFound => ClientError::SubjectNotFound,
            TransactionError::AuthorizationFailed(reason) => {
                ClientError::AuthorizationFailed(reason)
            }
            TransactionError::Replayed => {
                ClientError::AuthorizationFailed(TransactionError::Replayed.to_string())
            }
            TransactionError::InsufficientResources => ClientError::InsufficientResources,
            TransactionError::AddressMismatch => {
                ClientError::InvariantViolation(TransactionError::AddressMismatch.to_string())
            }
            TransactionError::InvariantViolation(reason) => ClientError::InvariantViolation(reason),
            TransactionError::TransportFailure(reason) => ClientError::TransportFailure(reason),
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(error: TransportError) -> Self {
        ClientError::TransportFailure(error.to_string())
    }
}

impl From<AddressError> for ClientError {
    fn from(error: AddressError) -> Self {
        TransactionError::from(error).into()
    }
}

impl From<AccountDecodeError> for ClientError {
    fn from(error: AccountDecodeError) -> Self {
        ClientError::InvariantViolation(error.to_string())
    }
}

impl From<SignatureError> for ClientError {
    fn from(error: SignatureError) -> Self {
        ClientError::SignError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ClientError;
    use crate::ledger::errors::{TransactionError, TransportError};

    #[test]
    fn test_classification() {
        assert!(ClientError::from(TransportError::ChannelClosed).is_retryable());
        assert!(ClientError::AlreadyExists.is_benign());
        assert!(ClientError::AlreadyVoted.is_benign());
        assert!(!ClientError::NoOpChange.is_benign());
        assert!(!ClientError::NoExistingVote.is_benign());
        assert!(!ClientError::AlreadyVoted.is_retryable());
    }

    #[test]
    fn test_replay_is_authorization_failure() {
        assert!(matches!(
            ClientError::from(TransactionError::Replayed),
            ClientError::AuthorizationFailed(_)
        ));
    }

    #[test]
    fn test_address_mismatch_is_invariant_violation() {
        assert!(matches!(
            ClientError::from(TransactionError::AddressMismatch),
            ClientError::InvariantViolation(_)
        ));
    }
}
