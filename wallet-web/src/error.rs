//! # Wallet Error Handling
//!
//! [`WalletError`] is the single error type returned by every wallet operation
//! (locating a provider, connecting, switching chains, loading config).
//!
//! ## Error Categories
//!
//! 1. **Provider availability**
//!    - [`ProviderNotFound`](WalletError::ProviderNotFound): extension missing or shadowed
//!    - [`UnsupportedWallet`](WalletError::UnsupportedWallet): kind not enabled in config
//!
//! 2. **Provider rejections** (decoded from the JS error object)
//!    - [`UserRejected`](WalletError::UserRejected): EIP-1193 code 4001
//!    - [`ChainUnrecognized`](WalletError::ChainUnrecognized): code 4902, recovered by registering the chain
//!    - [`ChainRegistrationFailed`](WalletError::ChainRegistrationFailed): `wallet_addEthereumChain` rejected
//!    - [`Provider`](WalletError::Provider): anything else
//!
//! 3. **Widget state**
//!    - [`NoActiveEvmWallet`](WalletError::NoActiveEvmWallet), [`ConnectInFlight`](WalletError::ConnectInFlight),
//!      [`ConnectCancelled`](WalletError::ConnectCancelled), [`NoAccounts`](WalletError::NoAccounts)
//!
//! 4. **Configuration**
//!    - [`UnknownChain`](WalletError::UnknownChain), [`Config`](WalletError::Config)
//!
//! None of these escape the operation that raised them: the UI turns them
//! into an inline [`Notice`](crate::state::wallet::Notice) via
//! [`WalletError::user_message`].

use serde::{Deserialize, Serialize};
use shared::dto::wallet::WalletKind;
use thiserror::Error;

use crate::utils::constants::{ERROR_CODE_UNRECOGNIZED_CHAIN, ERROR_CODE_USER_REJECTED};

pub type Result<T> = std::result::Result<T, WalletError>;

/// Rejection reported by an injected provider.
///
/// EIP-1193 rejections carry a numeric `code`; plain JS errors thrown by an
/// extension may not, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (code {code:?})")]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn without_code(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Some(ERROR_CODE_UNRECOGNIZED_CHAIN)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(ERROR_CODE_USER_REJECTED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{0} wallet not found")]
    ProviderNotFound(WalletKind),

    #[error("{0} wallet is not enabled")]
    UnsupportedWallet(WalletKind),

    #[error("Request rejected by user")]
    UserRejected,

    #[error("Chain not recognized by wallet")]
    ChainUnrecognized,

    #[error("Failed to add chain {chain} to wallet: {source}")]
    ChainRegistrationFailed {
        chain: String,
        #[source]
        source: ProviderError,
    },

    #[error("No EVM wallet connected")]
    NoActiveEvmWallet,

    #[error("Wallet connection already in progress")]
    ConnectInFlight,

    #[error("Wallet connection cancelled")]
    ConnectCancelled,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wallet provider error: {0}")]
    Provider(ProviderError),
}

impl WalletError {
    /// Classify a raw provider rejection.
    pub fn from_provider(error: ProviderError) -> Self {
        if error.is_user_rejection() {
            WalletError::UserRejected
        } else if error.is_unrecognized_chain() {
            WalletError::ChainUnrecognized
        } else {
            WalletError::Provider(error)
        }
    }

    /// Text for the inline notice shown under the wallet widget.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::ProviderNotFound(kind) => format!(
                "{} was not detected. Install or enable the extension, then try again.",
                kind.name()
            ),
            WalletError::UnsupportedWallet(kind) => {
                format!("{} is not available on this site.", kind.name())
            }
            WalletError::UserRejected => "The request was rejected in your wallet.".to_string(),
            WalletError::NoActiveEvmWallet => {
                "Connect MetaMask or Coinbase Wallet to switch networks.".to_string()
            }
            WalletError::ConnectInFlight => {
                "A wallet connection is already in progress.".to_string()
            }
            WalletError::ChainRegistrationFailed { chain, .. } => {
                format!("Your wallet could not add {}.", chain)
            }
            WalletError::Config(_) => "Wallet configuration could not be loaded.".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the failure is the user's own choice rather than a fault.
    pub fn is_benign(&self) -> bool {
        matches!(self, WalletError::UserRejected | WalletError::ConnectCancelled)
    }
}
