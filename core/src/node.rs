use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

use crate::address::AddressSpace;
use crate::client::RatingClient;
use crate::commons::channel::MpscChannel;
use crate::commons::config::RatingSettings;
use crate::commons::crypto::{Ed25519KeyPair, KeyGenerator, KeyMaterial, KeyPair};
use crate::commons::identifier::derive::KeyDerivator;
use crate::commons::identifier::{Derivable, KeyIdentifier};
use crate::commons::models::notification::Notification;
use crate::commons::self_signature_manager::SelfSignatureManager;
use crate::database::{DatabaseCollection, DatabaseManager, Error as DbError, DB};
use crate::error::Error;
use crate::ledger::manager::{LedgerAPI, LedgerManager};
use crate::ledger::{LedgerCommand, LedgerResponse};

/// Object that allows receiving the notifications emitted by the node after
/// every commit.
#[derive(Debug)]
pub struct NotificationHandler {
    notification_receiver: broadcast::Receiver<Notification>,
}

impl NotificationHandler {
    /// Waits until a new notification arrives. Notifications are queued from the
    /// moment the handler is created, so the oldest pending one is returned first.
    ///
    /// An `Error` is only obtained when the node has stopped and the queue is empty.
    /// The handler is useless from then on.
    pub fn receive<'a>(&'a mut self) -> BoxFuture<'a, Result<Notification, Error>> {
        async move {
            loop {
                match self.notification_receiver.recv().await {
                    Ok(value) => break Ok(value),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break Err(Error::CantReceiveNotification),
                }
            }
        }
        .boxed()
    }

    /// Returns a queued notification without waiting.
    ///
    /// # Possible results
    /// • A notification if one is queued. <br />
    /// • [Error::CantReceiveNotification] if no more notifications can be received. <br />
    /// • [Error::NoNewNotification] if the queue is empty but the node is still running.
    pub fn try_rec(&mut self) -> Result<Notification, Error> {
        loop {
            match self.notification_receiver.try_recv() {
                Ok(value) => break Ok(value),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Closed) => break Err(Error::CantReceiveNotification),
                Err(TryRecvError::Empty) => break Err(Error::NoNewNotification),
            }
        }
    }
}

/// Stops every task of a node.
#[derive(Debug, Clone)]
pub struct ShutdownManager {
    shutdown_sender: broadcast::Sender<()>,
}

impl ShutdownManager {
    pub fn shutdown(&self) {
        if self.shutdown_sender.send(()).is_err() {
            log::debug!("Shutdown requested on a node that is not running");
        }
    }
}

/// Node hosting the reference ledger.
///
/// A node is created with [LedgerNode::new] and becomes usable after
/// [LedgerNode::start]. The [LedgerAPI] can be obtained before starting; its
/// requests are queued until the ledger manager runs.
#[derive(Debug)]
pub struct LedgerNode<M: DatabaseManager<C>, C: DatabaseCollection> {
    api: LedgerAPI,
    ledger_input: Option<MpscChannel<LedgerCommand, LedgerResponse>>,
    notification_sender: broadcast::Sender<Notification>,
    shutdown_sender: broadcast::Sender<()>,
    signature_manager: Option<SelfSignatureManager>,
    settings: RatingSettings,
    database: Arc<M>,
    _c: PhantomData<C>,
}

impl<M: DatabaseManager<C> + 'static, C: DatabaseCollection + 'static> LedgerNode<M, C> {
    pub fn new(settings: RatingSettings, database: M) -> Self {
        let (ledger_input, ledger_sender) = MpscChannel::new(settings.ledger.buffer_size);
        let (notification_sender, _) = broadcast::channel(settings.ledger.buffer_size);
        let (shutdown_sender, _) = broadcast::channel(10);
        Self {
            api: LedgerAPI::new(ledger_sender),
            ledger_input: Some(ledger_input),
            notification_sender,
            shutdown_sender,
            signature_manager: None,
            settings,
            database: Arc::new(database),
            _c: PhantomData,
        }
    }

    /// Generates the node key pair, checks it against the one stored by a
    /// previous run and spawns the ledger manager. Must be called inside a
    /// tokio runtime.
    pub async fn start(&mut self) -> Result<(), Error> {
        let ledger_input = self.ledger_input.take().ok_or(Error::NodeAlreadyStarted)?;
        let keys = self.register_node_key()?;
        let signature_manager = SelfSignatureManager::new(keys, &self.settings);
        log::info!("Controller ID: {}", signature_manager.identifier);

        let manager = LedgerManager::new(
            ledger_input,
            self.shutdown_sender.clone(),
            self.shutdown_sender.subscribe(),
            self.notification_sender.clone(),
            DB::new(self.database.clone()),
            AddressSpace::new(self.settings.node.program_id.clone()),
            self.settings.node.digest_derivator,
            self.settings.ledger.max_accounts,
        );
        tokio::spawn(manager.start());
        self.signature_manager = Some(signature_manager);
        Ok(())
    }

    pub fn ledger_api(&self) -> LedgerAPI {
        self.api.clone()
    }

    /// A client bound to this node's ledger and address space.
    pub fn rating_client(&self) -> RatingClient<LedgerAPI> {
        RatingClient::new(
            self.ledger_api(),
            AddressSpace::new(self.settings.node.program_id.clone()),
        )
    }

    pub fn notification_handler(&self) -> NotificationHandler {
        NotificationHandler {
            notification_receiver: self.notification_sender.subscribe(),
        }
    }

    pub fn shutdown_manager(&self) -> ShutdownManager {
        ShutdownManager {
            shutdown_sender: self.shutdown_sender.clone(),
        }
    }

    /// Identity of the node. **None** until the node has been started.
    pub fn identity(&self) -> Option<KeyIdentifier> {
        self.signature_manager
            .as_ref()
            .map(|manager| manager.identifier.clone())
    }

    /// Signer holding the node key pair. **None** until the node has been started.
    pub fn signature_manager(&self) -> Option<SelfSignatureManager> {
        self.signature_manager.clone()
    }

    pub fn settings(&self) -> &RatingSettings {
        &self.settings
    }

    fn register_node_key(&self) -> Result<KeyPair, Error> {
        let keys = create_key_pair(
            &self.settings.node.key_derivator,
            self.settings.node.seed.clone(),
            self.settings.node.secret_key.clone(),
        )?;
        let controller_id = KeyIdentifier::new(keys.get_key_derivator(), &keys.public_key_bytes()).to_str();
        let db = DB::new(self.database.clone());
        match db.get_controller_id() {
            Ok(stored) => {
                if stored != controller_id {
                    log::error!("Invalid key pair specified. Another key pair was used before");
                    return Err(Error::InvalidKeyPairSpecified(stored));
                }
            }
            Err(DbError::EntryNotFound) => {
                db.set_controller_id(controller_id)
                    .map_err(|e| Error::DatabaseError(e.to_string()))?;
            }
            Err(error) => return Err(Error::DatabaseError(error.to_string())),
        }
        Ok(keys)
    }
}

/// Builds the node key pair from exactly one of a seed or a hex encoded secret key.
pub(crate) fn create_key_pair(
    derivator: &KeyDerivator,
    seed: Option<String>,
    secret_key: Option<String>,
) -> Result<KeyPair, Error> {
    match (seed, secret_key) {
        (Some(_), Some(_)) => Err(Error::PkConflict),
        (None, None) => Err(Error::NoMCAvailable),
        (None, Some(secret_key)) => {
            let bytes = hex::decode(secret_key).map_err(|_| Error::InvalidHexString)?;
            match derivator {
                KeyDerivator::Ed25519 => Ok(KeyPair::Ed25519(
                    Ed25519KeyPair::from_secret_key(&bytes)
                        .map_err(|e| Error::SeedError(e.to_string()))?,
                )),
            }
        }
        (Some(seed), None) => match derivator {
            KeyDerivator::Ed25519 => Ok(KeyPair::Ed25519(
                Ed25519KeyPair::from_seed(seed.as_bytes())
                    .map_err(|e| Error::SeedError(e.to_string()))?,
            )),
        },
    }
}
