use super::{create_seed, BaseKeyPair, KeyGenerator, KeyMaterial, KeyPair, Payload, DSA};

use crate::commons::identifier::Error;

use ed25519_dalek::{
    ExpandedSecretKey, PublicKey, SecretKey, Signature, Verifier, KEYPAIR_LENGTH, SECRET_KEY_LENGTH,
};

use base64::decode_config;
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};
use std::convert::TryFrom;

pub type Ed25519KeyPair = BaseKeyPair<PublicKey, SecretKey>;

impl KeyGenerator for Ed25519KeyPair {
    fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let secret_seed = create_seed(seed)?;
        Self::from_secret_key(&secret_seed)
    }

    fn from_public_key(public_key: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            public_key: PublicKey::from_bytes(public_key)?,
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8]) -> Result<Self, Error> {
        let sk: SecretKey = SecretKey::from_bytes(secret_key)?;
        let pk: PublicKey = (&sk).into();
        Ok(Ed25519KeyPair {
            secret_key: Some(sk),
            public_key: pk,
        })
    }
}

impl Clone for BaseKeyPair<PublicKey, SecretKey> {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            secret_key: self
                .secret_key
                .as_ref()
                .and_then(|sk| SecretKey::from_bytes(sk.as_bytes()).ok()),
        }
    }
}

impl KeyMaterial for Ed25519KeyPair {
    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.as_bytes().to_vec()
    }

    fn secret_key_bytes(&self) -> Vec<u8> {
        self.secret_key
            .as_ref()
            .map_or(vec![], |x| x.to_bytes().to_vec())
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: [u8; KEYPAIR_LENGTH] = [0u8; KEYPAIR_LENGTH];
        if let Some(sk) = &self.secret_key {
            bytes[..SECRET_KEY_LENGTH].copy_from_slice(sk.as_bytes());
        }
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(self.public_key.as_bytes());
        bytes.to_vec()
    }
}

impl DSA for Ed25519KeyPair {
    fn sign(&self, payload: Payload) -> Result<Vec<u8>, Error> {
        let esk: ExpandedSecretKey = match &self.secret_key {
            Some(x) => x,
            None => return Err(Error::SignError("Secret key not found".to_owned())),
        }
        .into();
        match payload {
            Payload::Buffer(msg) => Ok(esk
                .sign(msg.as_slice(), &self.public_key)
                .to_bytes()
                .to_vec()),
        }
    }

    fn verify(&self, payload: Payload, signature: &[u8]) -> Result<(), Error> {
        let sig = Signature::try_from(signature)
            .map_err(|_| Error::SignError("Invalid signature data".into()))?;
        match payload {
            Payload::Buffer(payload) => self
                .public_key
                .verify(payload.as_slice(), &sig)
                .map_err(|_| Error::VerificationError("Signature verify failed".into())),
        }
    }
}

impl From<Ed25519KeyPair> for KeyPair {
    fn from(key_pair: Ed25519KeyPair) -> Self {
        KeyPair::Ed25519(key_pair)
    }
}

// Serde compatible Serialize
impl Serialize for Ed25519KeyPair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_str())
    }
}

// Serde compatible Deserialize
impl<'de> Deserialize<'de> for Ed25519KeyPair {
    fn deserialize<D>(deserializer: D) -> Result<Ed25519KeyPair, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes =
            decode_config(&s, base64::URL_SAFE_NO_PAD).map_err(serde::de::Error::custom)?;
        if bytes.len() < SECRET_KEY_LENGTH {
            return Err(serde::de::Error::custom("key pair material too short"));
        }
        Ed25519KeyPair::from_secret_key(&bytes[..SECRET_KEY_LENGTH])
            .map_err(serde::de::Error::custom)
    }
}
