use serde::{Deserialize, Serialize};

/// Events of relevance reported by a running node after every commit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Notification {
    SubjectCreated {
        subject: String,
        identifier: String,
    },
    VoteCast {
        subject: String,
        voter: String,
        approve: bool,
    },
    VoteChanged {
        subject: String,
        voter: String,
        approve: bool,
    },
}
