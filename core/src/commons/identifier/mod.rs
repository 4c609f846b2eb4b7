//! Identifiers module
//!
//! Every identifier has a textual form made of a derivation code followed by
//! its material encoded as URL-safe base64 without padding.

pub mod derive;
pub(crate) mod address;
pub(crate) mod digest_identifier;
pub(crate) mod error;
pub(crate) mod key_identifier;
pub(crate) mod signature_identifier;

pub use address::Address;
pub use digest_identifier::DigestIdentifier;
pub use error::Error;
pub use key_identifier::KeyIdentifier;
pub use signature_identifier::SignatureIdentifier;

use base64::encode_config;
use std::str::FromStr;

/// Derivable Identifiers
pub trait Derivable: FromStr<Err = Error> {
    fn derivative(&self) -> Vec<u8>;

    fn derivation_code(&self) -> String;

    fn to_str(&self) -> String {
        match self.derivative().len() {
            0 => "".to_string(),
            _ => [
                self.derivation_code(),
                encode_config(self.derivative(), base64::URL_SAFE_NO_PAD),
            ]
            .join(""),
        }
    }
}
