//! # Wallet Configuration
//!
//! The set of wallets offered to the user, the chain selected by default, and
//! the table of EVM chains the widget can switch to.
//!
//! The shipped configuration lives in `config/wallet.json` and is embedded at
//! compile time. [`WalletConfig::from_json`] accepts any document of the same
//! shape, so a page can supply its own chain table.
//!
//! ```rust
//! use krbyland_wallet::config::WalletConfig;
//!
//! let config = WalletConfig::load().unwrap();
//! assert_eq!(config.default_chain, "ETHEREUM");
//! assert!(config.chains.get("POLYGON").is_some());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::dto::chain::ChainDescriptor;
use shared::dto::wallet::WalletKind;

use crate::error::{Result, WalletError};

const EMBEDDED_CONFIG: &str = include_str!("../config/wallet.json");

/// One row of the chain table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// Short identifier, e.g. `"POLYGON"`.
    pub key: String,
    /// Label for buttons, e.g. `"Polygon"`.
    pub label: String,
    #[serde(flatten)]
    pub descriptor: ChainDescriptor,
}

/// Ordered, read-only chain table keyed by [`ChainEntry::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainRegistry {
    entries: Vec<ChainEntry>,
}

impl ChainRegistry {
    pub fn new(entries: Vec<ChainEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ChainEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Look up a chain, failing with [`WalletError::UnknownChain`].
    pub fn require(&self, key: &str) -> Result<&ChainEntry> {
        self.get(key)
            .ok_or_else(|| WalletError::UnknownChain(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(WalletError::Config("chain table is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(WalletError::Config(format!("duplicate chain key {}", entry.key)));
            }
            if entry.descriptor.chain_id_decimal().is_none() {
                return Err(WalletError::Config(format!(
                    "chain {} has non-hex chainId {}",
                    entry.key, entry.descriptor.chain_id
                )));
            }
            if entry.descriptor.rpc_urls.is_empty() {
                return Err(WalletError::Config(format!("chain {} has no rpcUrls", entry.key)));
            }
        }
        Ok(())
    }
}

/// Wallet widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Wallet buttons offered, in display order.
    pub supported_wallets: Vec<WalletKind>,
    /// Key of the chain selected at page load.
    pub default_chain: String,
    pub chains: ChainRegistry,
}

impl WalletConfig {
    /// Load the configuration embedded in the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WalletConfig = serde_json::from_str(json)
            .map_err(|e| WalletError::Config(format!("invalid wallet config: {}", e)))?;
        config.validate()?;
        log::debug!(
            "Loaded wallet config: {} wallets, {} chains, default {}",
            config.supported_wallets.len(),
            config.chains.len(),
            config.default_chain
        );
        Ok(config)
    }

    pub fn supports(&self, kind: WalletKind) -> bool {
        kind != WalletKind::None && self.supported_wallets.contains(&kind)
    }

    fn validate(&self) -> Result<()> {
        if self.supported_wallets.is_empty() {
            return Err(WalletError::Config("no wallets enabled".to_string()));
        }
        if self.supported_wallets.contains(&WalletKind::None) {
            return Err(WalletError::Config("\"none\" is not a wallet".to_string()));
        }
        self.chains.validate()?;
        if self.chains.get(&self.default_chain).is_none() {
            return Err(WalletError::Config(format!(
                "default chain {} is not in the chain table",
                self.default_chain
            )));
        }
        Ok(())
    }
}
