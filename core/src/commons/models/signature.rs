//! Define the data structures related to signatures
use crate::commons::{
    crypto::{KeyPair, Payload, DSA},
    errors::SignatureError,
    identifier::{
        derive::digest::DigestDerivator, Derivable, DigestIdentifier, KeyIdentifier,
        SignatureIdentifier,
    },
};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::{timestamp::TimeStamp, HashId};

/// Defines the data used to generate the signature, as well as the signer's identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct SignatureContent {
    pub signer: KeyIdentifier,
    pub content_hash: DigestIdentifier,
    pub timestamp: TimeStamp,
}

/// The format, in addition to the signature, includes additional
/// information, namely the signer's identifier, the signature timestamp
/// and the hash of the signed contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Signature {
    pub content: SignatureContent,
    pub signature: SignatureIdentifier,
}

impl Signature {
    pub fn new<T: HashId>(
        content: &T,
        signer: KeyIdentifier,
        keys: &KeyPair,
        derivator: DigestDerivator,
    ) -> Result<Self, SignatureError> {
        let content_hash = content.hash_id(derivator)?;
        let signature_content = SignatureContent {
            signer: signer.clone(),
            content_hash,
            timestamp: TimeStamp::now(),
        };
        let signature_hash = DigestIdentifier::from_serializable_borsh(&signature_content, derivator)
            .map_err(|e| SignatureError::SignatureCreationFails(e.to_string()))?;
        let signature = keys
            .sign(Payload::Buffer(signature_hash.derivative()))
            .map_err(|e| SignatureError::SignatureCreationFails(e.to_string()))?;
        Ok(Self {
            content: signature_content,
            signature: SignatureIdentifier::new(signer.to_signature_derivator(), &signature),
        })
    }

    /// Checks that `content` is what was signed and that the signer's key produced the signature.
    pub fn verify<T: HashId>(&self, content: &T) -> Result<(), SignatureError> {
        let derivator = self.content.content_hash.derivator;
        let content_hash = content.hash_id(derivator)?;
        if content_hash != self.content.content_hash {
            return Err(SignatureError::SignatureVerifyFails(
                "Signed content hash does not match".to_owned(),
            ));
        }
        let signature_hash = DigestIdentifier::from_serializable_borsh(&self.content, derivator)
            .map_err(|e| SignatureError::SignatureVerifyFails(e.to_string()))?;
        self.content
            .signer
            .verify(&signature_hash.digest, &self.signature)
            .map_err(|e| SignatureError::SignatureVerifyFails(e.to_string()))
    }
}

/// Content together with the signature of its author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Signed<T: BorshSerialize + BorshDeserialize + Clone> {
    pub content: T,
    pub signature: Signature,
}
