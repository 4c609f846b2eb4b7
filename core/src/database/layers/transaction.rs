use super::account::LEDGER_COLLECTION;
use super::utils::{get_key, Element};
use crate::commons::identifier::{Derivable, DigestIdentifier};
use crate::database::{DatabaseCollection, DatabaseManager, Error as DbError};
use borsh::BorshSerialize;
use std::sync::Arc;

const TRANSACTION_PREFIX: &str = "transaction";

/// Ids of committed transactions, pointing at their log sequence number.
pub(crate) struct TransactionDb<C: DatabaseCollection> {
    collection: C,
}

impl<C: DatabaseCollection> TransactionDb<C> {
    pub fn new<M: DatabaseManager<C>>(manager: &Arc<M>) -> Self {
        Self {
            collection: manager.create_collection(LEDGER_COLLECTION),
        }
    }

    pub fn key(transaction_id: &DigestIdentifier) -> Result<String, DbError> {
        get_key(vec![
            Element::S(TRANSACTION_PREFIX.to_string()),
            Element::S(transaction_id.to_str()),
        ])
    }

    pub fn encode(sn: u64) -> Result<Vec<u8>, DbError> {
        sn.try_to_vec().map_err(|_| DbError::SerializeError)
    }

    pub fn is_committed(&self, transaction_id: &DigestIdentifier) -> Result<bool, DbError> {
        match self.collection.get(&Self::key(transaction_id)?) {
            Ok(_) => Ok(true),
            Err(DbError::EntryNotFound) => Ok(false),
            Err(error) => Err(error),
        }
    }
}
