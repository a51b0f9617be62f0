use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser wallet families the widget knows how to talk to.
///
/// At most one kind is active at a time. `None` is the empty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    MetaMask,
    Coinbase,
    Phantom,
    #[default]
    None,
}

impl WalletKind {
    /// Every kind that maps to a real wallet extension.
    pub const ALL: [WalletKind; 3] = [WalletKind::MetaMask, WalletKind::Coinbase, WalletKind::Phantom];

    pub fn name(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "MetaMask",
            WalletKind::Coinbase => "Coinbase Wallet",
            WalletKind::Phantom => "Phantom",
            WalletKind::None => "None",
        }
    }

    /// Network a successful connection of this kind lands on.
    pub fn network(&self) -> Option<Network> {
        match self {
            WalletKind::MetaMask | WalletKind::Coinbase => Some(Network::Evm),
            WalletKind::Phantom => Some(Network::Solana),
            WalletKind::None => None,
        }
    }

    pub fn is_evm(&self) -> bool {
        self.network() == Some(Network::Evm)
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Network family of a connected wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Evm,
    Solana,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Evm => "EVM",
            Network::Solana => "SOLANA",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
