use async_trait::async_trait;

use crate::{
    address::AddressSpace,
    commons::{
        channel::{ChannelData, MpscChannel, SenderEnd},
        identifier::{derive::digest::DigestDerivator, Address},
        models::{
            ledger_entry::LedgerEntry,
            notification::Notification,
            signature::Signed,
            transaction::{CommitReceipt, Transaction},
        },
    },
    database::{DatabaseCollection, DB},
};

use super::{
    errors::{LedgerError, TransactionError, TransportError},
    ledger::Ledger,
    LedgerCommand, LedgerResponse,
};

/// Read access to committed ledger accounts.
#[async_trait]
pub trait LedgerReader: Sync + Send {
    /// Raw bytes stored at `address`, or `None` when no account lives there.
    async fn get_account(&self, address: &Address) -> Result<Option<Vec<u8>>, TransportError>;
    /// Accounts in address order, starting after `from`. A negative quantity walks backwards.
    async fn list_accounts(
        &self,
        from: Option<Address>,
        quantity: isize,
    ) -> Result<Vec<(Address, Vec<u8>)>, TransportError>;
}

/// Submission of signed transactions. The call resolves once the
/// transaction is committed or rejected.
#[async_trait]
pub trait TransactionSubmitter: Sync + Send {
    async fn submit(
        &self,
        transaction: Signed<Transaction>,
    ) -> Result<CommitReceipt, TransactionError>;
}

pub struct LedgerManager<C: DatabaseCollection> {
    /// Communication channel for incoming petitions
    input_channel: MpscChannel<LedgerCommand, LedgerResponse>,
    inner_ledger: Ledger<C>,
    shutdown_sender: tokio::sync::broadcast::Sender<()>,
    shutdown_receiver: tokio::sync::broadcast::Receiver<()>,
    notification_sender: tokio::sync::broadcast::Sender<Notification>,
}

impl<C: DatabaseCollection> LedgerManager<C> {
    pub(crate) fn new(
        input_channel: MpscChannel<LedgerCommand, LedgerResponse>,
        shutdown_sender: tokio::sync::broadcast::Sender<()>,
        shutdown_receiver: tokio::sync::broadcast::Receiver<()>,
        notification_sender: tokio::sync::broadcast::Sender<Notification>,
        database: DB<C>,
        address_space: AddressSpace,
        digest_derivator: DigestDerivator,
        max_accounts: u64,
    ) -> Self {
        Self {
            input_channel,
            inner_ledger: Ledger::new(database, address_space, digest_derivator, max_accounts),
            shutdown_sender,
            shutdown_receiver,
            notification_sender,
        }
    }

    pub async fn start(mut self) {
        if let Err(error) = self.inner_ledger.init() {
            log::error!("Ledger manager could not start: {}", error);
            let _ = self.shutdown_sender.send(());
            return;
        }
        loop {
            tokio::select! {
                command = self.input_channel.receive() => {
                    match command {
                        Some(command) => self.process_command(command),
                        None => {
                            let _ = self.shutdown_sender.send(());
                            break;
                        }
                    }
                },
                _ = self.shutdown_receiver.recv() => {
                    log::debug!("Ledger manager shutting down");
                    break;
                }
            }
        }
    }

    fn process_command(&mut self, command: ChannelData<LedgerCommand, LedgerResponse>) {
        let (sender, data) = match command {
            ChannelData::AskData(data) => {
                let (sender, data) = data.get();
                (Some(sender), data)
            }
            ChannelData::TellData(data) => (None, data.get()),
        };
        let response = match data {
            LedgerCommand::Submit(transaction) => {
                let result = match self.inner_ledger.submit(transaction) {
                    Ok((receipt, notification)) => {
                        log::debug!("Committed transaction {} at sn {}", receipt.transaction_id, receipt.sn);
                        let _ = self.notification_sender.send(notification);
                        Ok(receipt)
                    }
                    Err(error) => {
                        log::warn!("Transaction rejected: {}", error);
                        Err(error)
                    }
                };
                LedgerResponse::Submit(result)
            }
            LedgerCommand::GetAccount(address) => {
                LedgerResponse::GetAccount(self.inner_ledger.get_account(&address))
            }
            LedgerCommand::ListAccounts { from, quantity } => {
                LedgerResponse::ListAccounts(self.inner_ledger.list_accounts(from, quantity))
            }
            LedgerCommand::GetLogEntries { from_sn, quantity } => {
                LedgerResponse::GetLogEntries(self.inner_ledger.get_log_entries(from_sn, quantity))
            }
            LedgerCommand::VerifyIntegrity => {
                LedgerResponse::VerifyIntegrity(self.inner_ledger.verify_integrity())
            }
        };
        if let Some(sender) = sender {
            if sender.send(response).is_err() {
                log::warn!("Ledger response dropped: requester is gone");
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LedgerAPI {
    sender: SenderEnd<LedgerCommand, LedgerResponse>,
}

impl LedgerAPI {
    pub fn new(sender: SenderEnd<LedgerCommand, LedgerResponse>) -> Self {
        Self { sender }
    }

    /// Log entries starting at `from_sn`, in commit order.
    pub async fn get_log_entries(
        &self,
        from_sn: u64,
        quantity: usize,
    ) -> Result<Vec<LedgerEntry>, TransportError> {
        let response = self
            .sender
            .ask(LedgerCommand::GetLogEntries { from_sn, quantity })
            .await
            .map_err(|_| TransportError::ChannelClosed)?;
        if let LedgerResponse::GetLogEntries(entries) = response {
            entries
        } else {
            Err(TransportError::UnexpectedResponse)
        }
    }

    /// Re-walks the hash chain of the whole log and returns its length.
    pub async fn verify_integrity(&self) -> Result<u64, LedgerError> {
        let response = self
            .sender
            .ask(LedgerCommand::VerifyIntegrity)
            .await
            .map_err(|e| LedgerError::DatabaseError(e.to_string()))?;
        if let LedgerResponse::VerifyIntegrity(result) = response {
            result
        } else {
            Err(LedgerError::DatabaseError(
                TransportError::UnexpectedResponse.to_string(),
            ))
        }
    }
}

#[async_trait]
impl LedgerReader for LedgerAPI {
    async fn get_account(&self, address: &Address) -> Result<Option<Vec<u8>>, TransportError> {
        let response = self
            .sender
            .ask(LedgerCommand::GetAccount(*address))
            .await
            .map_err(|_| TransportError::ChannelClosed)?;
        if let LedgerResponse::GetAccount(account) = response {
            account
        } else {
            Err(TransportError::UnexpectedResponse)
        }
    }

    async fn list_accounts(
        &self,
        from: Option<Address>,
        quantity: isize,
    ) -> Result<Vec<(Address, Vec<u8>)>, TransportError> {
        let response = self
            .sender
            .ask(LedgerCommand::ListAccounts { from, quantity })
            .await
            .map_err(|_| TransportError::ChannelClosed)?;
        if let LedgerResponse::ListAccounts(accounts) = response {
            accounts
        } else {
            Err(TransportError::UnexpectedResponse)
        }
    }
}

#[async_trait]
impl TransactionSubmitter for LedgerAPI {
    async fn submit(
        &self,
        transaction: Signed<Transaction>,
    ) -> Result<CommitReceipt, TransactionError> {
        let response = self
            .sender
            .ask(LedgerCommand::Submit(transaction))
            .await
            .map_err(|_| TransactionError::from(TransportError::ChannelClosed))?;
        if let LedgerResponse::Submit(result) = response {
            result
        } else {
            Err(TransportError::UnexpectedResponse.into())
        }
    }
}
