//! Chain Switcher
//!
//! `wallet_switchEthereumChain` (EIP-3326) with the `wallet_addEthereumChain`
//! (EIP-3085) fallback when the wallet answers 4902.
//!
//! Registration is never followed by a second switch request. Some wallets
//! switch on their own after adding a chain, others only add it; the caller
//! learns which step ran from [`SwitchOutcome`].

use serde_json::json;
use shared::dto::chain::{ChainDescriptor, SwitchEthereumChainParameter};

use super::provider::Eip1193Provider;
use crate::error::{Result, WalletError};
use crate::utils::constants::{WALLET_ADD_ETHEREUM_CHAIN, WALLET_SWITCH_ETHEREUM_CHAIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The wallet accepted the switch.
    Switched,
    /// The wallet did not know the chain; it has now been registered.
    Registered,
}

/// Ask `provider` to move to `chain`, registering the chain if it is unknown.
pub async fn switch_chain<P: Eip1193Provider>(
    provider: &P,
    chain: &ChainDescriptor,
) -> Result<SwitchOutcome> {
    log::info!("Switching wallet to {} ({})", chain.chain_name, chain.chain_id);

    let params = json!([SwitchEthereumChainParameter::from(chain)]);
    let error = match provider.request(WALLET_SWITCH_ETHEREUM_CHAIN, params).await {
        Ok(_) => return Ok(SwitchOutcome::Switched),
        Err(error) => error,
    };

    match WalletError::from_provider(error) {
        WalletError::ChainUnrecognized => {
            log::info!("{} unknown to wallet, registering it", chain.chain_name);
            register_chain(provider, chain).await?;
            Ok(SwitchOutcome::Registered)
        }
        other => {
            log::warn!("Failed to switch chain to {}: {}", chain.chain_name, other);
            Err(other)
        }
    }
}

async fn register_chain<P: Eip1193Provider>(provider: &P, chain: &ChainDescriptor) -> Result<()> {
    provider
        .request(WALLET_ADD_ETHEREUM_CHAIN, json!([chain]))
        .await
        .map(|_| ())
        .map_err(|source| {
            log::error!("Failed to add {} to wallet: {}", chain.chain_name, source);
            WalletError::ChainRegistrationFailed {
                chain: chain.chain_name.clone(),
                source,
            }
        })
}
