use std::path::Path;

use super::identifier::derive::{digest::DigestDerivator, KeyDerivator};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Error;

/// Address space used when no program id is configured.
pub const DEFAULT_PROGRAM_ID: &str = "rate_my_politician";
const DEFAULT_BUFFER_SIZE: usize = 1000;
const ENV_PREFIX: &str = "RATEMY";

/// Configuration parameters of a rating ledger node divided into categories.
#[derive(Debug, Deserialize, Clone)]
pub struct RatingSettings {
    pub node: NodeSettings,
    pub ledger: LedgerSettings,
}

/// General settings of a node.
#[derive(Debug, Deserialize, Clone)]
pub struct NodeSettings {
    /// [KeyDerivator] to be used by the secret key.
    #[serde(rename = "keyderivator")]
    pub key_derivator: KeyDerivator,
    /// Secret key to be used by the node, hex encoded
    #[serde(rename = "secretkey")]
    pub secret_key: Option<String>,
    pub seed: Option<String>,
    /// [DigestDerivator] used for transaction identifiers and ledger log hashes
    #[serde(rename = "digestderivator")]
    pub digest_derivator: DigestDerivator,
    /// Namespace mixed into every derived account address
    pub program_id: String,
}

/// Settings of the reference ledger.
#[derive(Debug, Deserialize, Clone)]
pub struct LedgerSettings {
    /// Maximum number of accounts the ledger will hold. 0 means unlimited.
    pub max_accounts: u64,
    /// Capacity of the command queue of the ledger manager.
    pub buffer_size: usize,
}

impl RatingSettings {
    /// Layers the given TOML file and the `RATEMY__SECTION__KEY` environment
    /// variables over the default settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let config = Self::builder()?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Like [RatingSettings::load] but only environment variables are considered.
    pub fn from_env() -> Result<Self, Error> {
        let config = Self::builder()?
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, Error> {
        Ok(Config::builder()
            .set_default("node.keyderivator", KeyDerivator::Ed25519)?
            .set_default("node.digestderivator", DigestDerivator::Blake3_256)?
            .set_default("node.program_id", DEFAULT_PROGRAM_ID)?
            .set_default("ledger.max_accounts", 0i64)?
            .set_default("ledger.buffer_size", DEFAULT_BUFFER_SIZE as i64)?)
    }
}

/// Instance a default settings to start a new node
pub fn get_default_settings() -> RatingSettings {
    RatingSettings {
        node: NodeSettings {
            key_derivator: KeyDerivator::Ed25519,
            secret_key: None,
            seed: None,
            digest_derivator: DigestDerivator::Blake3_256,
            program_id: DEFAULT_PROGRAM_ID.into(),
        },
        ledger: LedgerSettings {
            max_accounts: 0,
            buffer_size: DEFAULT_BUFFER_SIZE,
        },
    }
}
