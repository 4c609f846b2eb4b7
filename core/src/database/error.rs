//! Possible errors of a ledger Database
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Entry Not Found")]
    EntryNotFound,
    #[error("Error while serializing")]
    SerializeError,
    #[error("Error while deserializing")]
    DeserializeError,
    #[error("Key elements must have at least one element")]
    KeyElementsError,
    #[error("An error withing the database custom implementation: {0}")]
    CustomError(String),
}
