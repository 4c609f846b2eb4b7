use super::utils::{get_by_range, get_key, Element};
use crate::commons::identifier::{Address, Derivable};
use crate::database::{DatabaseCollection, DatabaseManager, Error as DbError};
use std::str::FromStr;
use std::sync::Arc;

pub(crate) const LEDGER_COLLECTION: &str = "ledger";
const ACCOUNT_PREFIX: &str = "account";

/// Raw account bytes keyed by address. Decoding is left to the reader.
pub(crate) struct AccountDb<C: DatabaseCollection> {
    collection: C,
    prefix: String,
}

impl<C: DatabaseCollection> AccountDb<C> {
    pub fn new<M: DatabaseManager<C>>(manager: &Arc<M>) -> Self {
        Self {
            collection: manager.create_collection(LEDGER_COLLECTION),
            prefix: ACCOUNT_PREFIX.to_string(),
        }
    }

    pub fn key(address: &Address) -> Result<String, DbError> {
        get_key(vec![
            Element::S(ACCOUNT_PREFIX.to_string()),
            Element::S(address.to_str()),
        ])
    }

    pub fn get_account(&self, address: &Address) -> Result<Option<Vec<u8>>, DbError> {
        match self.collection.get(&Self::key(address)?) {
            Ok(data) => Ok(Some(data)),
            Err(DbError::EntryNotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub fn get_accounts(
        &self,
        from: Option<Address>,
        quantity: isize,
    ) -> Result<Vec<(Address, Vec<u8>)>, DbError> {
        let from = from.map(|address| address.to_str());
        get_by_range(from, quantity, &self.collection, &self.prefix)?
            .into_iter()
            .map(|(key, data)| {
                let address = Address::from_str(&key).map_err(|_| DbError::DeserializeError)?;
                Ok((address, data))
            })
            .collect()
    }

    pub fn count_accounts(&self) -> u64 {
        self.collection
            .iter(false, format!("{}{}", self.prefix, char::MAX))
            .count() as u64
    }
}
