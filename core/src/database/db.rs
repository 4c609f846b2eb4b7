use std::sync::Arc;

use super::layers::{
    account::{AccountDb, LEDGER_COLLECTION},
    controller_id::ControllerIdDb,
    ledger_log::LedgerLogDb,
    transaction::TransactionDb,
};
use super::{DatabaseCollection, DatabaseManager, Error};
use crate::commons::identifier::{Address, DigestIdentifier};
use crate::commons::models::ledger_entry::LedgerEntry;

/// Typed access to every layer of the node database.
pub(crate) struct DB<C: DatabaseCollection> {
    account_db: AccountDb<C>,
    ledger_log_db: LedgerLogDb<C>,
    controller_id_db: ControllerIdDb<C>,
    transaction_db: TransactionDb<C>,
    commit_collection: C,
}

impl<C: DatabaseCollection> DB<C> {
    pub fn new<M: DatabaseManager<C>>(manager: Arc<M>) -> Self {
        Self {
            account_db: AccountDb::new(&manager),
            ledger_log_db: LedgerLogDb::new(&manager),
            controller_id_db: ControllerIdDb::new(&manager),
            transaction_db: TransactionDb::new(&manager),
            commit_collection: manager.create_collection(LEDGER_COLLECTION),
        }
    }

    pub fn get_account(&self, address: &Address) -> Result<Option<Vec<u8>>, Error> {
        self.account_db.get_account(address)
    }

    pub fn get_accounts(
        &self,
        from: Option<Address>,
        quantity: isize,
    ) -> Result<Vec<(Address, Vec<u8>)>, Error> {
        self.account_db.get_accounts(from, quantity)
    }

    pub fn count_accounts(&self) -> u64 {
        self.account_db.count_accounts()
    }

    pub fn get_log_entry(&self, sn: u64) -> Result<LedgerEntry, Error> {
        self.ledger_log_db.get_entry(sn)
    }

    pub fn get_last_log_entry(&self) -> Result<Option<LedgerEntry>, Error> {
        self.ledger_log_db.get_last_entry()
    }

    pub fn get_log_entries(&self, from_sn: u64, quantity: usize) -> Result<Vec<LedgerEntry>, Error> {
        self.ledger_log_db.get_entries(from_sn, quantity)
    }

    pub fn is_committed(&self, transaction_id: &DigestIdentifier) -> Result<bool, Error> {
        self.transaction_db.is_committed(transaction_id)
    }

    /// Stores the touched accounts, the log entry and the transaction id of one
    /// transaction in a single batch.
    pub fn commit(&self, accounts: Vec<(Address, Vec<u8>)>, entry: &LedgerEntry) -> Result<(), Error> {
        let mut batch = Vec::with_capacity(accounts.len() + 1);
        for (address, data) in accounts {
            batch.push((AccountDb::<C>::key(&address)?, data));
        }
        batch.push((LedgerLogDb::<C>::key(entry.sn)?, LedgerLogDb::<C>::encode(entry)?));
        batch.push((
            TransactionDb::<C>::key(&entry.transaction_id)?,
            TransactionDb::<C>::encode(entry.sn)?,
        ));
        self.commit_collection.put_batch(batch)
    }

    pub fn get_controller_id(&self) -> Result<String, Error> {
        self.controller_id_db.get_controller_id()
    }

    pub fn set_controller_id(&self, controller_id: String) -> Result<(), Error> {
        self.controller_id_db.set_controller_id(controller_id)
    }
}
