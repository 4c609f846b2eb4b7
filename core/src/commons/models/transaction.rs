use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::{
    signature::{Signature, Signed},
    timestamp::TimeStamp,
    HashId,
};
use crate::commons::{
    errors::SignatureError,
    identifier::{derive::digest::DigestDerivator, Address, DigestIdentifier, KeyIdentifier},
};

/// State transition requested from the ledger. Every address carried here is
/// recomputed by the ledger before anything is applied.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum Instruction {
    CreateSubject {
        subject: Address,
        identifier: String,
    },
    CastVote {
        subject: Address,
        vote_record: Address,
        approve: bool,
    },
    ChangeVote {
        subject: Address,
        vote_record: Address,
        new_approve: bool,
    },
}

impl Instruction {
    pub fn subject(&self) -> &Address {
        match self {
            Instruction::CreateSubject { subject, .. }
            | Instruction::CastVote { subject, .. }
            | Instruction::ChangeVote { subject, .. } => subject,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    pub instruction: Instruction,
    pub signer: KeyIdentifier,
    pub timestamp: TimeStamp,
}

impl Transaction {
    pub fn new(instruction: Instruction, signer: KeyIdentifier) -> Self {
        Self {
            instruction,
            signer,
            timestamp: TimeStamp::now(),
        }
    }
}

impl HashId for Transaction {
    fn hash_id(&self, derivator: DigestDerivator) -> Result<DigestIdentifier, SignatureError> {
        DigestIdentifier::from_serializable_borsh(self, derivator)
            .map_err(|_| SignatureError::HashFailed("HashId for Transaction Fails".to_string()))
    }
}

impl Signed<Transaction> {
    pub fn new(transaction: Transaction, signature: Signature) -> Self {
        Self {
            content: transaction,
            signature,
        }
    }

    /// The signature must come from the declared signer and cover this exact transaction.
    pub fn verify(&self) -> Result<(), SignatureError> {
        if self.signature.content.signer != self.content.signer {
            return Err(SignatureError::SignatureVerifyFails(
                "Signer does not match the transaction signer".to_owned(),
            ));
        }
        self.signature.verify(&self.content)
    }
}

/// Answer of the ledger to a committed transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CommitReceipt {
    pub transaction_id: DigestIdentifier,
    pub sn: u64,
}

#[cfg(test)]
mod tests {
    use super::{Instruction, Transaction};
    use crate::commons::{
        crypto::{generate, Ed25519KeyPair, KeyMaterial},
        identifier::{derive::digest::DigestDerivator, Address, KeyIdentifier},
        models::signature::{Signature, Signed},
    };

    fn signed_cast(seed: &[u8], approve: bool) -> Signed<Transaction> {
        let keys = generate::<Ed25519KeyPair>(Some(seed)).unwrap();
        let signer = KeyIdentifier::new(keys.get_key_derivator(), &keys.public_key_bytes());
        let transaction = Transaction::new(
            Instruction::CastVote {
                subject: Address::new([1u8; 32]),
                vote_record: Address::new([2u8; 32]),
                approve,
            },
            signer.clone(),
        );
        let signature =
            Signature::new(&transaction, signer, &keys, DigestDerivator::Blake3_256).unwrap();
        Signed::<Transaction>::new(transaction, signature)
    }

    #[test]
    fn test_signed_transaction_verifies() {
        assert!(signed_cast(b"voter-a", true).verify().is_ok());
    }

    #[test]
    fn test_tampered_instruction_fails() {
        let mut signed = signed_cast(b"voter-a", true);
        signed.content.instruction = Instruction::CastVote {
            subject: Address::new([1u8; 32]),
            vote_record: Address::new([2u8; 32]),
            approve: false,
        };
        assert!(signed.verify().is_err());
    }

    #[test]
    fn test_foreign_signer_fails() {
        let mut signed = signed_cast(b"voter-a", true);
        let other = signed_cast(b"voter-b", true);
        signed.content.signer = other.content.signer;
        assert!(signed.verify().is_err());
    }
}
