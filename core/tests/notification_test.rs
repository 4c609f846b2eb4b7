mod common;
use std::time::Duration;

use common::*;
use ratemy_core::{Derivable, Error, IdentityProvider, Notification};

#[tokio::test]
async fn notification_test() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let voter = identity("voter");
    let subject = client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    client.vote("Jane Doe", &voter, true).await.unwrap();
    client.vote("Jane Doe", &voter, false).await.unwrap();
    // Rejected transactions are not notified.
    let _ = client.create_subject("Jane Doe", &node.authority()).await;

    let notifier = node.notifier();
    assert_eq!(
        notifier.try_rec().unwrap(),
        Notification::SubjectCreated {
            subject: subject.to_str(),
            identifier: "Jane Doe".into(),
        }
    );
    assert_eq!(
        notifier.try_rec().unwrap(),
        Notification::VoteCast {
            subject: subject.to_str(),
            voter: voter.identity().to_str(),
            approve: true,
        }
    );
    assert_eq!(
        notifier.try_rec().unwrap(),
        Notification::VoteChanged {
            subject: subject.to_str(),
            voter: voter.identity().to_str(),
            approve: false,
        }
    );
    assert!(matches!(notifier.try_rec(), Err(Error::NoNewNotification)));
    node.shutdown();
}

#[tokio::test]
async fn wait_for_notifications() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let authority = node.authority();
    let voter = identity("voter");
    let task = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        client.create_subject("John Roe", &authority).await.unwrap();
        client.vote("John Roe", &voter, false).await.unwrap();
    });
    assert_eq!(
        node.notifier().wait_for_subject_created().await.unwrap(),
        "John Roe"
    );
    let (_, approve) = node.notifier().wait_for_vote().await.unwrap();
    assert!(!approve);
    task.await.unwrap();
    node.shutdown();
}
