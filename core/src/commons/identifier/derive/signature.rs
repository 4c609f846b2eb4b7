//! Self Signing derivation module
//!

use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};

use super::Derivator;
use crate::commons::identifier::{error::Error, signature_identifier::SignatureIdentifier};

/// Enumeration with signature derivator types
#[derive(
    Debug, PartialEq, Clone, Copy, Eq, Hash, BorshSerialize, BorshDeserialize, PartialOrd,
)]
pub enum SignatureDerivator {
    Ed25519Sha512,
}

impl SignatureDerivator {
    pub fn derive(&self, sign: &[u8]) -> SignatureIdentifier {
        SignatureIdentifier::new(*self, sign)
    }
}

impl Derivator for SignatureDerivator {
    fn code_len(&self) -> usize {
        match self {
            Self::Ed25519Sha512 => 2,
        }
    }

    fn derivative_len(&self) -> usize {
        match self {
            Self::Ed25519Sha512 => 86,
        }
    }

    fn to_str(&self) -> String {
        match self {
            Self::Ed25519Sha512 => "SE",
        }
        .into()
    }
}

impl FromStr for SignatureDerivator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.get(..2) {
            Some("SE") => Ok(Self::Ed25519Sha512),
            _ => Err(Error::DeserializationError),
        }
    }
}
