use super::utils::{get_by_range, get_key, Element};
use crate::commons::models::ledger_entry::LedgerEntry;
use crate::database::{DatabaseCollection, DatabaseManager, Error as DbError};
use borsh::{BorshDeserialize, BorshSerialize};
use std::sync::Arc;

use super::account::LEDGER_COLLECTION;

const LOG_PREFIX: &str = "log";

/// Hash chained log of committed transactions, ordered by sequence number.
pub(crate) struct LedgerLogDb<C: DatabaseCollection> {
    collection: C,
    prefix: String,
}

impl<C: DatabaseCollection> LedgerLogDb<C> {
    pub fn new<M: DatabaseManager<C>>(manager: &Arc<M>) -> Self {
        Self {
            collection: manager.create_collection(LEDGER_COLLECTION),
            prefix: LOG_PREFIX.to_string(),
        }
    }

    pub fn key(sn: u64) -> Result<String, DbError> {
        get_key(vec![Element::S(LOG_PREFIX.to_string()), Element::N(sn)])
    }

    pub fn encode(entry: &LedgerEntry) -> Result<Vec<u8>, DbError> {
        entry.try_to_vec().map_err(|_| DbError::SerializeError)
    }

    pub fn get_entry(&self, sn: u64) -> Result<LedgerEntry, DbError> {
        let data = self.collection.get(&Self::key(sn)?)?;
        LedgerEntry::try_from_slice(&data).map_err(|_| DbError::DeserializeError)
    }

    pub fn get_last_entry(&self) -> Result<Option<LedgerEntry>, DbError> {
        let last = get_by_range(None, -1, &self.collection, &self.prefix)?;
        match last.into_iter().next() {
            Some((_, data)) => Ok(Some(
                LedgerEntry::try_from_slice(&data).map_err(|_| DbError::DeserializeError)?,
            )),
            None => Ok(None),
        }
    }

    pub fn get_entries(&self, from_sn: u64, quantity: usize) -> Result<Vec<LedgerEntry>, DbError> {
        self.collection
            .iter(false, format!("{}{}", self.prefix, char::MAX))
            .skip(from_sn as usize)
            .take(quantity)
            .map(|(_, data)| {
                LedgerEntry::try_from_slice(&data).map_err(|_| DbError::DeserializeError)
            })
            .collect()
    }
}
