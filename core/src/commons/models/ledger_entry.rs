use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::{transaction::Instruction, HashId};
use crate::commons::{
    errors::SignatureError,
    identifier::{derive::digest::DigestDerivator, DigestIdentifier, KeyIdentifier},
};

/// Entry of the hash chained ledger log. Entry `n + 1` stores the hash of entry `n`.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct LedgerEntry {
    pub sn: u64,
    pub transaction_id: DigestIdentifier,
    pub previous_hash: DigestIdentifier,
    pub instruction: Instruction,
    pub signer: KeyIdentifier,
}

impl HashId for LedgerEntry {
    fn hash_id(&self, derivator: DigestDerivator) -> Result<DigestIdentifier, SignatureError> {
        DigestIdentifier::from_serializable_borsh(self, derivator)
            .map_err(|_| SignatureError::HashFailed("HashId for LedgerEntry Fails".to_string()))
    }
}
