//! Possible errors of a rating ledger node
use config::ConfigError;
use thiserror::Error;

/// Possible errors that a node can generate while it is configured or started.
/// It does not include the typed rejections of the ledger or the client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings Load Error")]
    SettingsError {
        #[from]
        source: ConfigError,
    },
    #[error("Can't received anymore notifications. All notification senders dropped")]
    CantReceiveNotification,
    #[error("No notifications pending")]
    NoNewNotification,
    #[error("Can't generate PK. Both seed and explicit PK are defined in provided settings")]
    PkConflict,
    #[error("Either a seed or the node secret key must be specified to start a node")]
    NoMCAvailable,
    #[error("Invalid Hex String as Private Key")]
    InvalidHexString,
    #[error("Key material could not be generated: {0}")]
    SeedError(String),
    #[error("Node has previously executed with a different KeyPair. Please, specify the same KeyPair as before. Current ControllerID {0}")]
    InvalidKeyPairSpecified(String),
    #[error("A database error has ocurred at main component {0}")]
    DatabaseError(String),
    #[error("Node already started")]
    NodeAlreadyStarted,
}
