//! Deterministic addressing of ledger accounts.
//!
//! An address is the Blake3-256 digest of the length prefixed program id,
//! namespace tag, every input part and a trailing bump byte. The bump starts
//! at 255 and goes down until the digest is not a reserved value: the all zero
//! address or any 32 bytes that decode as an Ed25519 public key. Account
//! addresses therefore can never be signed for.

mod error;
mod name;

pub use error::AddressError;
pub use name::{SubjectName, MAX_NAME_LEN};

use ed25519_dalek::PublicKey;

use crate::commons::identifier::{Address, KeyIdentifier};

pub const SUBJECT_TAG: &str = "politician";
pub const VOTE_TAG: &str = "vote";

/// Address together with the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Address,
    pub bump: u8,
}

/// Derives the address of `tag` and `parts` inside the `program_id` namespace.
pub fn derive(program_id: &str, tag: &str, parts: &[&[u8]]) -> Result<DerivedAddress, AddressError> {
    for bump in (0..=u8::MAX).rev() {
        let candidate = hash_candidate(program_id, tag, parts, bump);
        if !is_reserved(&candidate) {
            return Ok(DerivedAddress {
                address: Address::new(candidate),
                bump,
            });
        }
    }
    Err(AddressError::NoViableBump(tag.to_owned()))
}

fn hash_candidate(program_id: &str, tag: &str, parts: &[&[u8]], bump: u8) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    write_prefixed(&mut hasher, program_id.as_bytes());
    write_prefixed(&mut hasher, tag.as_bytes());
    hasher.update(&(parts.len() as u32).to_le_bytes());
    for part in parts {
        write_prefixed(&mut hasher, part);
    }
    hasher.update(&[bump]);
    *hasher.finalize().as_bytes()
}

fn write_prefixed(hasher: &mut blake3::Hasher, data: &[u8]) {
    hasher.update(&(data.len() as u32).to_le_bytes());
    hasher.update(data);
}

fn is_reserved(candidate: &[u8; 32]) -> bool {
    candidate.iter().all(|b| *b == 0) || PublicKey::from_bytes(candidate).is_ok()
}

/// Address derivation bound to one program id. Clients and the ledger must
/// share the same program id to agree on addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    program_id: String,
}

impl AddressSpace {
    pub fn new<S: Into<String>>(program_id: S) -> Self {
        Self {
            program_id: program_id.into(),
        }
    }

    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    pub fn subject_address(&self, name: &SubjectName) -> Result<DerivedAddress, AddressError> {
        derive(&self.program_id, SUBJECT_TAG, &[name.as_str().as_bytes()])
    }

    pub fn vote_record_address(
        &self,
        subject: &Address,
        voter: &KeyIdentifier,
    ) -> Result<DerivedAddress, AddressError> {
        derive(
            &self.program_id,
            VOTE_TAG,
            &[subject.as_bytes().as_slice(), voter.public_key.as_slice()],
        )
    }
}
