use thiserror::Error;

/// Rejections of the account state machines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Subject already exists")]
    AlreadyExists,
    #[error("Voter already voted on this subject")]
    AlreadyVoted,
    #[error("Voter has no vote to change")]
    NoExistingVote,
    #[error("Vote already has the requested direction")]
    NoOpChange,
    #[error("Counter overflow")]
    Overflow,
    #[error("Counter underflow")]
    Underflow,
    #[error("Vote record does not belong to this subject and voter")]
    RecordMismatch,
}

impl StateError {
    /// Errors that can only be produced by corrupted state, never by a caller.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            StateError::Overflow | StateError::Underflow | StateError::RecordMismatch
        )
    }
}
