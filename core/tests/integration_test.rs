mod common;
use std::sync::Arc;

use common::*;
use futures::FutureExt;
use ratemy_core::{
    transaction::{Instruction, Transaction},
    signature::Signed,
    ClientError, Error, IdentityProvider, TransactionError, TransactionSubmitter,
};

#[test]
fn init_node() {
    init_logging();
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut node = NodeBuilder::new().build();
        assert!(node.start().await.is_ok());
        assert!(matches!(
            node.start().await,
            Err(NodeError::StartError(Error::NodeAlreadyStarted))
        ));
        node.shutdown();
    });
}

#[tokio::test]
async fn jane_doe_scenario() {
    init_logging();
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let authority = node.authority();
    let (a, b) = (identity("voter-a"), identity("voter-b"));

    client.create_subject("Jane Doe", &authority).await.unwrap();

    let stats = client.vote("Jane Doe", &a, true).await.unwrap().stats;
    assert_eq!(
        (stats.approve_count, stats.disapprove_count, stats.total_votes),
        (1, 0, 1)
    );
    assert_eq!((stats.approve_percentage, stats.disapprove_percentage), (100, 0));

    let stats = client.vote("Jane Doe", &b, false).await.unwrap().stats;
    assert_eq!(
        (stats.approve_count, stats.disapprove_count, stats.total_votes),
        (1, 1, 2)
    );
    assert_eq!((stats.approve_percentage, stats.disapprove_percentage), (50, 50));

    let receipt = client.vote("Jane Doe", &a, false).await.unwrap();
    assert_eq!(
        (
            receipt.stats.approve_count,
            receipt.stats.disapprove_count,
            receipt.stats.total_votes
        ),
        (0, 2, 2)
    );
    assert_eq!(
        (receipt.stats.approve_percentage, receipt.stats.disapprove_percentage),
        (0, 100)
    );
    assert_eq!(receipt.status.approve, Some(false));

    // A second cast through the raw submitter is refused and changes nothing.
    let space = client.address_space();
    let subject = receipt.subject;
    let vote_record = space
        .vote_record_address(&subject, &a.identity())
        .unwrap()
        .address;
    let transaction = Transaction::new(
        Instruction::CastVote {
            subject,
            vote_record,
            approve: true,
        },
        a.identity(),
    );
    let signature = a.sign(&transaction).unwrap();
    assert_eq!(
        node.ledger_api()
            .submit(Signed::<Transaction>::new(transaction, signature))
            .await,
        Err(TransactionError::AlreadyVoted)
    );
    assert_eq!(client.get_stats("Jane Doe").await.unwrap(), receipt.stats);
    node.shutdown();
}

#[tokio::test]
async fn same_direction_is_a_no_op() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let voter = identity("voter");
    client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    client.vote("Jane Doe", &voter, true).await.unwrap();
    let entries = node.ledger_api().get_log_entries(0, 100).await.unwrap().len();

    let error = client.vote("Jane Doe", &voter, true).await.unwrap_err();
    assert_eq!(error, ClientError::NoOpChange);
    assert!(!error.is_benign());
    assert_eq!(
        node.ledger_api().get_log_entries(0, 100).await.unwrap().len(),
        entries
    );
    node.shutdown();
}

#[tokio::test]
async fn unknown_subject_reads_as_zero() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let stats = client.get_stats("Nobody").await.unwrap();
    assert_eq!(stats.name, "Nobody");
    assert_eq!(stats.total_votes, 0);
    assert_eq!((stats.approve_percentage, stats.disapprove_percentage), (0, 0));
    let status = client
        .has_voted("Nobody", &identity("voter").identity())
        .await
        .unwrap();
    assert!(!status.has_voted);
    assert_eq!(status.approve, None);
    node.shutdown();
}

#[tokio::test]
async fn concurrent_casts_from_one_voter() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = Arc::new(node.client());
    client.create_subject("Jane Doe", &node.authority()).await.unwrap();

    let voter = Arc::new(identity("voter"));
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let voter = voter.clone();
        tasks.push(tokio::spawn(async move {
            client.vote("Jane Doe", voter.as_ref(), true).await
        }));
    }
    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(error) => assert!(matches!(
                error,
                ClientError::AlreadyVoted | ClientError::NoOpChange
            )),
        }
    }
    assert_eq!(successes, 1);
    let stats = client.get_stats("Jane Doe").await.unwrap();
    assert_eq!((stats.approve_count, stats.disapprove_count), (1, 0));
    node.shutdown();
}

#[tokio::test]
async fn distinct_voters_add_up() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    let mut approvals = 0u64;
    for i in 0..8u64 {
        let approve = i % 3 != 0;
        approvals += approve as u64;
        let stats = client
            .vote("Jane Doe", &identity(&format!("voter-{i}")), approve)
            .await
            .unwrap()
            .stats;
        assert_eq!(stats.total_votes, (i + 1) as u128);
        assert_eq!(stats.approve_count, approvals);
    }
    // 5 of 8 approve: 62.5% rounds half up.
    let stats = client.get_stats("Jane Doe").await.unwrap();
    assert_eq!((stats.approve_percentage, stats.disapprove_percentage), (63, 37));
    node.shutdown();
}

#[tokio::test]
async fn flip_round_trip_restores_counters() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let voter = identity("voter");
    client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    let initial = client.vote("Jane Doe", &voter, true).await.unwrap().stats;
    client.vote("Jane Doe", &voter, false).await.unwrap();
    let restored = client.vote("Jane Doe", &voter, true).await.unwrap().stats;
    assert_eq!(initial, restored);
    node.shutdown();
}

#[tokio::test]
async fn forged_transactions_are_rejected() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let api = node.ledger_api();
    let voter = identity("voter");
    let intruder = identity("intruder");
    let subject = client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    let vote_record = client
        .address_space()
        .vote_record_address(&subject, &voter.identity())
        .unwrap()
        .address;

    // Signed by someone other than the declared signer.
    let transaction = Transaction::new(
        Instruction::CastVote {
            subject,
            vote_record,
            approve: true,
        },
        voter.identity(),
    );
    let signature = intruder.sign(&transaction).unwrap();
    assert!(matches!(
        api.submit(Signed::<Transaction>::new(transaction.clone(), signature))
            .await,
        Err(TransactionError::AuthorizationFailed(_))
    ));

    // Content changed after signing.
    let signature = voter.sign(&transaction).unwrap();
    let mut tampered = Signed::<Transaction>::new(transaction, signature);
    tampered.content.instruction = Instruction::CastVote {
        subject,
        vote_record,
        approve: false,
    };
    assert!(matches!(
        api.submit(tampered).await,
        Err(TransactionError::AuthorizationFailed(_))
    ));

    // Intruder signs properly but targets the voter's record.
    let transaction = Transaction::new(
        Instruction::CastVote {
            subject,
            vote_record,
            approve: true,
        },
        intruder.identity(),
    );
    let signature = intruder.sign(&transaction).unwrap();
    assert_eq!(
        api.submit(Signed::<Transaction>::new(transaction, signature))
            .await,
        Err(TransactionError::AddressMismatch)
    );

    let stats = client.get_stats("Jane Doe").await.unwrap();
    assert_eq!(stats.total_votes, 0);
    node.shutdown();
}

#[tokio::test]
async fn replayed_change_vote_is_rejected() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let api = node.ledger_api();
    let voter = identity("voter");
    let subject = client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    let vote_record = client
        .address_space()
        .vote_record_address(&subject, &voter.identity())
        .unwrap()
        .address;
    client.vote("Jane Doe", &voter, true).await.unwrap();

    let transaction = Transaction::new(
        Instruction::ChangeVote {
            subject,
            vote_record,
            new_approve: false,
        },
        voter.identity(),
    );
    let signature = voter.sign(&transaction).unwrap();
    let flip = Signed::<Transaction>::new(transaction, signature);
    api.submit(flip.clone()).await.unwrap();
    client.vote("Jane Doe", &voter, true).await.unwrap();

    assert!(matches!(
        api.submit(flip).await,
        Err(TransactionError::Replayed)
    ));
    let stats = client.get_stats("Jane Doe").await.unwrap();
    assert_eq!((stats.approve_count, stats.disapprove_count), (1, 0));
    assert!(client
        .has_voted("Jane Doe", &voter.identity())
        .await
        .unwrap()
        .approve
        .unwrap());
    node.shutdown();
}

#[tokio::test]
async fn capacity_is_enforced() {
    let mut node = NodeBuilder::new().with_max_accounts(2).build();
    node.start().await.unwrap();
    let client = node.client();
    let authority = node.authority();
    client.create_subject("Jane Doe", &authority).await.unwrap();
    client.vote("Jane Doe", &identity("voter-a"), true).await.unwrap();
    assert_eq!(
        client.vote("Jane Doe", &identity("voter-b"), true).await,
        Err(ClientError::InsufficientResources)
    );
    assert_eq!(
        client.create_subject("John Roe", &authority).await,
        Err(ClientError::InsufficientResources)
    );
    // Changing a vote creates no account.
    client.vote("Jane Doe", &identity("voter-a"), false).await.unwrap();
    node.shutdown();
}

#[tokio::test]
async fn log_chain_verifies() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let authority = node.authority();
    for name in ["Jane Doe", "John Roe"] {
        client.create_subject(name, &authority).await.unwrap();
        for i in 0..3 {
            let voter = identity(&format!("voter-{i}"));
            client.vote(name, &voter, i % 2 == 0).await.unwrap();
            client.vote(name, &voter, i % 2 != 0).await.unwrap();
        }
    }
    let api = node.ledger_api();
    assert_eq!(api.verify_integrity().await.unwrap(), 14);
    let entries = api.get_log_entries(0, 100).await.unwrap();
    assert_eq!(entries.len(), 14);
    assert!(entries.iter().enumerate().all(|(i, entry)| entry.sn == i as u64));

    let subjects = client.list_subjects(None, 10).await.unwrap();
    assert_eq!(subjects.len(), 2);
    node.shutdown();
}

#[tokio::test]
async fn restart_keeps_state_and_key() {
    let database = SharedMemory::default();
    let mut node = NodeBuilder::new().with_database(database.clone()).build();
    node.start().await.unwrap();
    let client = node.client();
    client.create_subject("Jane Doe", &node.authority()).await.unwrap();
    client.vote("Jane Doe", &identity("voter"), true).await.unwrap();
    node.shutdown();

    let mut other = NodeBuilder::new()
        .with_seed("someone else".into())
        .with_database(database.clone())
        .build();
    assert!(matches!(
        other.start().await,
        Err(NodeError::StartError(Error::InvalidKeyPairSpecified(_)))
    ));

    let mut node = NodeBuilder::new().with_database(database).build();
    node.start().await.unwrap();
    let client = node.client();
    let stats = client.get_stats("Jane Doe").await.unwrap();
    assert_eq!(stats.approve_count, 1);
    client.vote("Jane Doe", &identity("voter"), false).await.unwrap();
    assert_eq!(node.ledger_api().verify_integrity().await.unwrap(), 3);
    node.shutdown();
}

#[tokio::test]
async fn shutdown_closes_the_ledger() {
    let mut node = NodeBuilder::new().build();
    node.start().await.unwrap();
    let client = node.client();
    let authority = node.authority();
    node.shutdown();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let result = do_task_with_timeout(
        async move { client.create_subject("Jane Doe", &authority).await }.boxed(),
        1000,
    )
    .await
    .unwrap();
    assert!(matches!(result, Err(ClientError::TransportFailure(_))));
}
