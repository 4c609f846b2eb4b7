mod db;
mod error;
mod layers;
mod memory;

pub(crate) use db::DB;
pub use error::Error;
pub use memory::{MemoryCollection, MemoryManager};

/// Factory of collections. Asking twice for the same identifier must return
/// handles over the same data.
pub trait DatabaseManager<C>: Sync + Send
where
    C: DatabaseCollection,
{
    fn create_collection(&self, identifier: &str) -> C;
}

/// Ordered key value store over raw bytes.
pub trait DatabaseCollection: Sync + Send {
    fn get(&self, key: &str) -> Result<Vec<u8>, Error>;
    fn put(&self, key: &str, data: Vec<u8>) -> Result<(), Error>;
    /// Writes every entry or none of them. Readers never observe a partial batch.
    fn put_batch(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), Error>;
    fn del(&self, key: &str) -> Result<(), Error>;
    /// Entries whose key starts with `prefix`, with the prefix stripped from the key.
    fn iter<'a>(
        &'a self,
        reverse: bool,
        prefix: String,
    ) -> Box<dyn Iterator<Item = (String, Vec<u8>)> + 'a>;
}
