use base64::decode_config;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::{error::Error, Derivable};

const ADDRESS_CODE: &str = "A";
const ADDRESS_LEN: usize = 32;
const ADDRESS_STR_LEN: usize = 44;

/// Fixed size identifier of a persisted ledger account.
///
/// Addresses are never chosen by callers; they are the output of the
/// derivation functions in [`crate::address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl Derivable for Address {
    fn derivative(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn derivation_code(&self) -> String {
        ADDRESS_CODE.to_owned()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ADDRESS_STR_LEN || !s.starts_with(ADDRESS_CODE) {
            return Err(Error::SemanticError(format!("Invalid address: {}", s)));
        }
        let bytes = decode_config(&s[ADDRESS_CODE.len()..], base64::URL_SAFE_NO_PAD)?;
        let bytes: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| Error::SemanticError(format!("Invalid address length: {}", s)))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_str())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::string::String as Deserialize>::deserialize(deserializer)?;
        Address::from_str(&s).map_err(serde::de::Error::custom)
    }
}
