use super::{
    errors::SignatureError,
    models::{signature::Signature, HashId},
};
use crate::commons::{
    config::RatingSettings,
    crypto::{KeyMaterial, KeyPair},
    identifier::{derive::digest::DigestDerivator, KeyIdentifier},
};

/// Source of a voter (or authority) identity able to sign ledger content.
///
/// The core never looks at key material; it only asks for the identity and
/// for signatures.
pub trait IdentityProvider {
    fn identity(&self) -> KeyIdentifier;
    fn sign<T: HashId>(&self, content: &T) -> Result<Signature, SignatureError>;
}

#[derive(Clone, Debug)]
pub struct SelfSignatureManager {
    pub keys: KeyPair,
    pub identifier: KeyIdentifier,
    pub digest_derivator: DigestDerivator,
}

impl SelfSignatureManager {
    pub fn new(keys: KeyPair, settings: &RatingSettings) -> Self {
        Self::with_derivator(keys, settings.node.digest_derivator)
    }

    pub fn with_derivator(keys: KeyPair, digest_derivator: DigestDerivator) -> Self {
        let identifier = KeyIdentifier::new(keys.get_key_derivator(), &keys.public_key_bytes());
        Self {
            keys,
            identifier,
            digest_derivator,
        }
    }

    pub fn change_settings(&mut self, settings: &RatingSettings) {
        self.digest_derivator = settings.node.digest_derivator;
    }
}

impl IdentityProvider for SelfSignatureManager {
    fn identity(&self) -> KeyIdentifier {
        self.identifier.clone()
    }

    fn sign<T: HashId>(&self, content: &T) -> Result<Signature, SignatureError> {
        Signature::new(
            content,
            self.identifier.clone(),
            &self.keys,
            self.digest_derivator,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentityProvider, SelfSignatureManager};
    use crate::commons::{
        config::get_default_settings,
        crypto::{generate, Ed25519KeyPair},
        identifier::derive::digest::DigestDerivator,
        models::transaction::{Instruction, Transaction},
    };
    use crate::commons::identifier::Address;

    #[test]
    fn test_signs_with_configured_derivator() {
        let mut settings = get_default_settings();
        let keys = generate::<Ed25519KeyPair>(Some(b"authority")).unwrap();
        let mut manager = SelfSignatureManager::new(keys, &settings);
        let transaction = Transaction::new(
            Instruction::CreateSubject {
                subject: Address::new([3u8; 32]),
                identifier: "Jane Doe".into(),
            },
            manager.identity(),
        );
        let signature = manager.sign(&transaction).unwrap();
        assert_eq!(signature.content.signer, manager.identity());
        assert!(signature.verify(&transaction).is_ok());

        settings.node.digest_derivator = DigestDerivator::Blake3_512;
        manager.change_settings(&settings);
        let signature = manager.sign(&transaction).unwrap();
        assert_eq!(
            signature.content.content_hash.derivator,
            DigestDerivator::Blake3_512
        );
        assert!(signature.verify(&transaction).is_ok());
    }
}
