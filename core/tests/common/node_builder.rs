use ratemy_core::{
    get_default_settings, LedgerAPI, LedgerNode, MemoryCollection, RatingClient,
    SelfSignatureManager, ShutdownManager,
};

use super::error::NodeError;
use super::notifier::RatingNotifier;
use super::utils::SharedMemory;

pub struct NodeBuilder {
    seed: Option<String>,
    secret_key: Option<String>,
    max_accounts: u64,
    database: SharedMemory,
}

#[allow(dead_code)]
impl NodeBuilder {
    pub fn new() -> Self {
        Self {
            seed: Some("authority".into()),
            secret_key: None,
            max_accounts: 0,
            database: SharedMemory::default(),
        }
    }

    pub fn build(self) -> RatingTestNode {
        let mut settings = get_default_settings();
        settings.node.seed = self.seed;
        settings.node.secret_key = self.secret_key;
        settings.ledger.max_accounts = self.max_accounts;
        RatingTestNode::new(LedgerNode::new(settings, self.database))
    }

    pub fn with_seed(mut self, seed: String) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_secret_key(mut self, secret_key: String) -> Self {
        self.seed = None;
        self.secret_key = Some(secret_key);
        self
    }

    pub fn with_max_accounts(mut self, max_accounts: u64) -> Self {
        self.max_accounts = max_accounts;
        self
    }

    pub fn with_database(mut self, database: SharedMemory) -> Self {
        self.database = database;
        self
    }
}

pub struct RatingTestNode {
    node: LedgerNode<SharedMemory, MemoryCollection>,
    notifier: RatingNotifier,
    shutdown_manager: ShutdownManager,
}

#[allow(dead_code)]
impl RatingTestNode {
    pub fn new(node: LedgerNode<SharedMemory, MemoryCollection>) -> Self {
        let notifier = RatingNotifier::new(node.notification_handler());
        let shutdown_manager = node.shutdown_manager();
        Self {
            node,
            notifier,
            shutdown_manager,
        }
    }

    pub async fn start(&mut self) -> Result<(), NodeError> {
        self.node.start().await.map_err(NodeError::StartError)
    }

    pub fn client(&self) -> RatingClient<LedgerAPI> {
        self.node.rating_client()
    }

    pub fn ledger_api(&self) -> LedgerAPI {
        self.node.ledger_api()
    }

    /// Node identity, used as the subject creation authority.
    pub fn authority(&self) -> SelfSignatureManager {
        self.node.signature_manager().unwrap()
    }

    pub fn notifier(&mut self) -> &mut RatingNotifier {
        &mut self.notifier
    }

    pub fn shutdown(self) {
        self.shutdown_manager.shutdown();
    }
}
