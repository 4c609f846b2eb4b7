use borsh::BorshSerialize;

use super::errors::SignatureError;
use crate::commons::identifier::{derive::digest::DigestDerivator, DigestIdentifier};

pub mod account;
pub mod ledger_entry;
pub mod notification;
pub mod signature;
pub mod timestamp;
pub mod transaction;

/// Content addressed values. The identifier is the digest of the borsh encoding.
pub trait HashId: BorshSerialize {
    fn hash_id(&self, derivator: DigestDerivator) -> Result<DigestIdentifier, SignatureError>;
}
