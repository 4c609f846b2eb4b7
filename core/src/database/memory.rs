use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::{DatabaseCollection, DatabaseManager, Error};

pub struct DataStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl DataStore {
    fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>, Error> {
        self.data
            .read()
            .map_err(|_| Error::CustomError("memory store lock poisoned".to_owned()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>>, Error> {
        self.data
            .write()
            .map_err(|_| Error::CustomError("memory store lock poisoned".to_owned()))
    }

    /// Copies the matching entries so that no lock outlives the call.
    fn snapshot(&self, reverse: bool, prefix: &str) -> Vec<(String, Vec<u8>)> {
        let Ok(lock) = self.read() else {
            log::error!("Memory store lock poisoned, iteration returns nothing");
            return vec![];
        };
        let mut entries: Vec<(String, Vec<u8>)> = lock
            .range(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key[prefix.len()..].to_owned(), value.clone()))
            .collect();
        if reverse {
            entries.reverse();
        }
        entries
    }
}

/// In memory backend. Data lives as long as the manager or any of its collections.
pub struct MemoryManager {
    data: RwLock<HashMap<String, Arc<DataStore>>>,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseManager<MemoryCollection> for MemoryManager {
    fn create_collection(&self, identifier: &str) -> MemoryCollection {
        let store = match self.data.write() {
            Ok(mut lock) => lock
                .entry(identifier.to_owned())
                .or_insert_with(|| Arc::new(DataStore::new()))
                .clone(),
            Err(poisoned) => poisoned
                .into_inner()
                .entry(identifier.to_owned())
                .or_insert_with(|| Arc::new(DataStore::new()))
                .clone(),
        };
        MemoryCollection { data: store }
    }
}

pub struct MemoryCollection {
    data: Arc<DataStore>,
}

impl DatabaseCollection for MemoryCollection {
    fn get(&self, key: &str) -> Result<Vec<u8>, Error> {
        let lock = self.data.read()?;
        let Some(data) = lock.get(key) else {
            return Err(Error::EntryNotFound);
        };
        Ok(data.clone())
    }

    fn put(&self, key: &str, data: Vec<u8>) -> Result<(), Error> {
        let mut lock = self.data.write()?;
        lock.insert(key.to_string(), data);
        Ok(())
    }

    fn put_batch(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), Error> {
        let mut lock = self.data.write()?;
        for (key, data) in entries {
            lock.insert(key, data);
        }
        Ok(())
    }

    fn del(&self, key: &str) -> Result<(), Error> {
        let mut lock = self.data.write()?;
        lock.remove(key);
        Ok(())
    }

    fn iter<'a>(
        &'a self,
        reverse: bool,
        prefix: String,
    ) -> Box<dyn Iterator<Item = (String, Vec<u8>)> + 'a> {
        Box::new(self.data.snapshot(reverse, &prefix).into_iter())
    }
}
