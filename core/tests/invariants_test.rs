mod common;

use common::*;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestCaseError};

/// Any sequence of casts and changes keeps the counters equal to the current
/// opinions of the distinct voters.
#[test]
fn counters_follow_opinions() {
    let config = Config::with_cases(16);
    let votes = proptest::collection::vec((0usize..5, any::<bool>()), 1..25);
    proptest!(config, |(votes in votes)| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let mut node = NodeBuilder::new().build();
            node.start().await.unwrap();
            let client = node.client();
            client.create_subject("Jane Doe", &node.authority()).await.unwrap();
            let voters: Vec<_> = (0..5).map(|i| identity(&format!("voter-{i}"))).collect();
            let mut opinions: [Option<bool>; 5] = [None; 5];
            for (index, approve) in votes {
                let result = client.vote("Jane Doe", &voters[index], approve).await;
                if opinions[index] == Some(approve) {
                    prop_assert!(result.is_err());
                } else {
                    prop_assert!(result.is_ok());
                    opinions[index] = Some(approve);
                }
                let stats = client.get_stats("Jane Doe").await.unwrap();
                let approvals = opinions.iter().filter(|o| **o == Some(true)).count() as u64;
                let rejections = opinions.iter().filter(|o| **o == Some(false)).count() as u64;
                prop_assert_eq!(stats.approve_count, approvals);
                prop_assert_eq!(stats.disapprove_count, rejections);
                if stats.total_votes > 0 {
                    prop_assert_eq!(stats.approve_percentage + stats.disapprove_percentage, 100);
                }
            }
            prop_assert!(node.ledger_api().verify_integrity().await.is_ok());
            node.shutdown();
            Ok::<(), TestCaseError>(())
        })?;
    });
}
