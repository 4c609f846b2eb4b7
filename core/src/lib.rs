//! RateMy is a tamper-evident approval ledger. Named subjects are created once,
//! every voter holds at most one opinion per subject and the ledger keeps the
//! approve and disapprove counters consistent with those opinions after every commit.
//!
//! The crate provides the building blocks of such a ledger: deterministic addressing
//! of accounts, the subject and vote record state machines, the statistics derived
//! from a subject, a reference ledger node that commits signed transactions atomically
//! into a hash-chained log, and a [RatingClient] that orchestrates the user level
//! operations against any ledger implementing [LedgerReader] and [TransactionSubmitter].
//!
//! # Basic usage
//! ```
//!use ratemy_core::crypto::{Ed25519KeyPair, KeyGenerator, KeyPair};
//!use ratemy_core::{get_default_settings, LedgerNode, MemoryCollection, MemoryManager};
//!use ratemy_core::{Notification, SelfSignatureManager};
//!
//!#[tokio::main]
//!async fn main() {
//!    let mut settings = get_default_settings();
//!    settings.node.seed = Some("ledger authority".to_owned());
//!
//!    // We build and start the node
//!    let mut node = LedgerNode::<MemoryManager, MemoryCollection>::new(settings, MemoryManager::new());
//!    let mut notifier = node.notification_handler();
//!    let shutdown_manager = node.shutdown_manager();
//!    node.start().await.expect("Node started");
//!
//!    // The node key pair acts as the authority that creates subjects
//!    let authority = node.signature_manager().expect("Node started");
//!    let client = node.rating_client();
//!    client.create_subject("Jane Doe", &authority).await.expect("Subject created");
//!
//!    // Any key pair can vote
//!    let keys = KeyPair::Ed25519(Ed25519KeyPair::from_seed(b"voter").expect("Keys"));
//!    let voter = SelfSignatureManager::new(keys, node.settings());
//!    let receipt = client.vote("Jane Doe", &voter, true).await.expect("Vote committed");
//!    assert_eq!(receipt.stats.approve_percentage, 100);
//!
//!    match notifier.receive().await {
//!        Ok(Notification::SubjectCreated { identifier, .. }) => assert_eq!(identifier, "Jane Doe"),
//!        _ => panic!("Unexpected notification"),
//!    }
//!
//!    shutdown_manager.shutdown();
//!}
//! ```
//!
pub mod address;
pub mod aggregator;
pub mod client;
pub(crate) mod commons;
pub(crate) mod database;
pub mod error;
pub mod ledger;
mod node;
pub mod state;

pub use aggregator::{compute_stats, Stats};
pub use client::{ClientError, RatingClient, VoteReceipt};
pub use commons::crypto;
pub use commons::identifier;
pub use commons::identifier::{
    Address, Derivable, DigestIdentifier, KeyIdentifier, SignatureIdentifier,
};
pub use commons::models::{account, ledger_entry, signature, transaction, HashId};
pub use commons::self_signature_manager::{IdentityProvider, SelfSignatureManager};
pub use commons::{
    config::{get_default_settings, LedgerSettings, NodeSettings, RatingSettings},
    errors::{ChannelErrors, SignatureError},
    identifier::derive::{digest::DigestDerivator, KeyDerivator},
    models::notification::Notification,
    models::timestamp::TimeStamp,
};
pub use database::{
    DatabaseCollection, DatabaseManager, Error as DbError, MemoryCollection, MemoryManager,
};
pub use error::Error;
pub use ledger::errors::{LedgerError, TransactionError, TransportError};
pub use ledger::manager::{LedgerAPI, LedgerReader, TransactionSubmitter};
pub use node::{LedgerNode, NotificationHandler, ShutdownManager};
