//! Key derivation module
//!

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Derivator, SignatureDerivator};
use crate::commons::identifier::{error::Error, key_identifier::KeyIdentifier};

/// Enumeration with key derivator types
#[derive(
    Debug,
    PartialEq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Eq,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    PartialOrd,
    Ord,
)]
pub enum KeyDerivator {
    Ed25519,
}

impl KeyDerivator {
    pub fn derive(&self, public_key: &[u8]) -> KeyIdentifier {
        KeyIdentifier::new(*self, public_key)
    }

    pub fn to_signature_derivator(&self) -> SignatureDerivator {
        match self {
            KeyDerivator::Ed25519 => SignatureDerivator::Ed25519Sha512,
        }
    }
}

impl Derivator for KeyDerivator {
    fn code_len(&self) -> usize {
        match self {
            Self::Ed25519 => 1,
        }
    }

    fn derivative_len(&self) -> usize {
        match self {
            Self::Ed25519 => 43,
        }
    }

    fn to_str(&self) -> String {
        match self {
            Self::Ed25519 => "E",
        }
        .into()
    }
}

impl FromStr for KeyDerivator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.get(..1) {
            Some("E") => Ok(Self::Ed25519),
            _ => Err(Error::DeserializationError),
        }
    }
}

impl From<KeyDerivator> for config::Value {
    fn from(data: KeyDerivator) -> Self {
        match data {
            KeyDerivator::Ed25519 => {
                Self::new(None, config::ValueKind::String("Ed25519".to_owned()))
            }
        }
    }
}
