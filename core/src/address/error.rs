use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("No bump produces a usable address for tag {0}")]
    NoViableBump(String),
}
