//! Connection state

use serde::{Deserialize, Serialize};
use shared::dto::wallet::{Network, WalletKind};
use shared::utils::truncate_address;

/// The one wallet connection the page tracks.
///
/// `kind` records the wallet most recently asked to connect, even when that
/// attempt failed. Only `address` says whether a wallet is actually
/// connected; use [`is_connected`](Self::is_connected) or
/// [`connected_kind`](Self::connected_kind) rather than reading `kind`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub kind: WalletKind,
    pub address: Option<String>,
    pub network: Option<Network>,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The wallet kind, but only once it produced an address.
    pub fn connected_kind(&self) -> Option<WalletKind> {
        self.address.as_ref().map(|_| self.kind)
    }

    /// True when an EVM wallet is connected, the precondition for switching
    /// chains.
    pub fn has_evm_wallet(&self) -> bool {
        self.network == Some(Network::Evm) && self.address.is_some()
    }

    /// Address shortened to `first5...last4`, or `None` when disconnected.
    pub fn display_address(&self) -> Option<String> {
        self.address.as_deref().map(truncate_address)
    }

    /// Drop any previous connection and record the wallet being connected.
    pub(crate) fn begin_connect(&mut self, kind: WalletKind) {
        *self = Self {
            kind,
            address: None,
            network: None,
        };
    }

    pub(crate) fn complete_connect(&mut self, address: String, network: Network) {
        self.address = Some(address);
        self.network = Some(network);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
