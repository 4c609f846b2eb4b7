use super::utils::{get_key, Element};
use crate::database::{DatabaseCollection, DatabaseManager, Error as DbError};
use borsh::{BorshDeserialize, BorshSerialize};
use std::sync::Arc;

/// Identity of the key pair the node was first started with.
pub(crate) struct ControllerIdDb<C: DatabaseCollection> {
    collection: C,
    prefix: String,
}

impl<C: DatabaseCollection> ControllerIdDb<C> {
    pub fn new<M: DatabaseManager<C>>(manager: &Arc<M>) -> Self {
        Self {
            collection: manager.create_collection("controller-id"),
            prefix: "controller-id".to_string(),
        }
    }

    pub fn get_controller_id(&self) -> Result<String, DbError> {
        let key = get_key(vec![Element::S(self.prefix.clone())])?;
        let controller_id = self.collection.get(&key)?;
        String::try_from_slice(&controller_id).map_err(|_| DbError::DeserializeError)
    }

    pub fn set_controller_id(&self, controller_id: String) -> Result<(), DbError> {
        let key = get_key(vec![Element::S(self.prefix.clone())])?;
        let data = controller_id
            .try_to_vec()
            .map_err(|_| DbError::SerializeError)?;
        self.collection.put(&key, data)
    }
}
