use std::time::Duration;

use ratemy_core::{Notification, NotificationHandler};

use super::error::NotifierError;

const MAX_TIMEOUT_MS: u64 = 5000;

pub struct RatingNotifier {
    notifier: NotificationHandler,
}

#[allow(dead_code)]
impl RatingNotifier {
    pub fn new(notifier: NotificationHandler) -> Self {
        Self { notifier }
    }

    async fn wait_for_notification<V, F: Fn(Notification) -> Option<V>>(
        &mut self,
        callback: F,
    ) -> Result<V, NotifierError> {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(MAX_TIMEOUT_MS)) => {
                Err(NotifierError::RequestTimeout)
            },
            result = async {
                loop {
                    match self.notifier.receive().await {
                        Ok(data) => {
                            if let Some(result) = callback(data) {
                                break Ok(result)
                            }
                        },
                        Err(_) => break Err(NotifierError::NotificationChannelClosed),
                    }
                }
            } => result
        }
    }

    /// Identifier of the next created subject.
    pub async fn wait_for_subject_created(&mut self) -> Result<String, NotifierError> {
        self.wait_for_notification(|data| match data {
            Notification::SubjectCreated { identifier, .. } => Some(identifier),
            _ => None,
        })
        .await
    }

    /// Voter and direction of the next cast or changed vote.
    pub async fn wait_for_vote(&mut self) -> Result<(String, bool), NotifierError> {
        self.wait_for_notification(|data| match data {
            Notification::VoteCast { voter, approve, .. }
            | Notification::VoteChanged { voter, approve, .. } => Some((voter, approve)),
            _ => None,
        })
        .await
    }

    pub fn try_rec(&mut self) -> Result<Notification, ratemy_core::Error> {
        self.notifier.try_rec()
    }
}
