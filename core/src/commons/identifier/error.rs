use ed25519_dalek::ed25519;
use thiserror::Error;

/// Errors produced while parsing, deriving or verifying identifiers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Verification error: {0}")]
    VerificationError(String),

    #[error("Deserialization error")]
    DeserializationError,

    #[error("Base64 Decoding error")]
    Base64DecodingError {
        #[from]
        source: base64::DecodeError,
    },

    #[error("Ed25519 error")]
    Ed25519Error {
        #[from]
        source: ed25519::Error,
    },

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Semantic error: {0}")]
    SemanticError(String),

    #[error("Sign error: {0}")]
    SignError(String),

    #[error("Serialization with Borsh fails")]
    BorshSerializationFailed,
}
