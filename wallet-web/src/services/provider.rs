//! Injected provider abstractions
//!
//! Wallet extensions attach provider objects to the page (`window.ethereum`,
//! `window.solana`). The controller never reads those globals directly: it
//! goes through a [`ProviderSource`], which the browser implements in
//! [`injected`](super::injected) and tests implement with fakes.

#![allow(async_fn_in_trait)]

use serde_json::Value;
use shared::dto::wallet::WalletKind;

use crate::error::ProviderError;

/// Identity flags a provider reports about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderFlags {
    pub is_metamask: bool,
    pub is_coinbase_wallet: bool,
    pub is_phantom: bool,
}

impl ProviderFlags {
    pub fn metamask() -> Self {
        Self {
            is_metamask: true,
            ..Self::default()
        }
    }

    pub fn coinbase() -> Self {
        Self {
            is_coinbase_wallet: true,
            ..Self::default()
        }
    }

    pub fn phantom() -> Self {
        Self {
            is_phantom: true,
            ..Self::default()
        }
    }

    /// Whether these flags identify the requested wallet.
    pub fn matches(&self, kind: WalletKind) -> bool {
        match kind {
            WalletKind::MetaMask => self.is_metamask,
            WalletKind::Coinbase => self.is_coinbase_wallet,
            WalletKind::Phantom => self.is_phantom,
            WalletKind::None => false,
        }
    }
}

/// EIP-1193 style EVM provider.
pub trait Eip1193Provider: Clone + 'static {
    fn flags(&self) -> ProviderFlags;

    /// Co-installed providers when this object is an aggregate. Empty when
    /// the object is a single provider.
    fn providers(&self) -> Vec<Self>;

    /// `request({ method, params })`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

/// Solana provider as injected by Phantom.
pub trait SolanaProvider: Clone + 'static {
    fn is_phantom(&self) -> bool;

    /// `connect()`, returning the stringified public key.
    async fn connect(&self) -> Result<String, ProviderError>;
}

/// Access to whatever providers are currently injected into the page.
pub trait ProviderSource {
    type Evm: Eip1193Provider;
    type Solana: SolanaProvider;

    /// The EVM provider aggregate, if any extension injected one.
    fn ethereum(&self) -> Option<Self::Evm>;

    /// The Solana provider, if any extension injected one.
    fn solana(&self) -> Option<Self::Solana>;
}
