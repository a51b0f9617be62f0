//! Provider Locator
//!
//! Several wallet extensions can inject into the same `window.ethereum`
//! slot. Some of them (Coinbase Wallet in particular) then expose every
//! co-installed implementation through a `providers` array on the aggregate.
//! This module picks the one matching the requested [`WalletKind`].

use shared::dto::wallet::WalletKind;

use super::provider::{Eip1193Provider, ProviderSource, SolanaProvider};
use crate::error::{Result, WalletError};

/// A provider resolved for one wallet kind.
#[derive(Clone)]
pub enum LocatedProvider<E, S> {
    Evm(E),
    Solana(S),
}

/// Resolve the provider for `kind`, or [`WalletError::ProviderNotFound`].
pub fn locate<P: ProviderSource>(
    source: &P,
    kind: WalletKind,
) -> Result<LocatedProvider<P::Evm, P::Solana>> {
    match kind {
        WalletKind::MetaMask | WalletKind::Coinbase => {
            locate_evm(source, kind).map(LocatedProvider::Evm)
        }
        WalletKind::Phantom => locate_phantom(source).map(LocatedProvider::Solana),
        WalletKind::None => Err(WalletError::ProviderNotFound(kind)),
    }
}

/// Resolve an EVM provider for `kind`.
///
/// With a non-empty `providers` list only the list is searched; the
/// aggregate's own flags are used only when there is no list.
pub fn locate_evm<P: ProviderSource>(source: &P, kind: WalletKind) -> Result<P::Evm> {
    let aggregate = source
        .ethereum()
        .ok_or(WalletError::ProviderNotFound(kind))?;

    let providers = aggregate.providers();
    let found = if providers.is_empty() {
        aggregate.flags().matches(kind).then_some(aggregate)
    } else {
        log::debug!("Scanning {} injected EVM providers for {}", providers.len(), kind);
        providers.into_iter().find(|provider| provider.flags().matches(kind))
    };

    found.ok_or_else(|| {
        log::warn!("No injected EVM provider identifies as {}", kind);
        WalletError::ProviderNotFound(kind)
    })
}

fn locate_phantom<P: ProviderSource>(source: &P) -> Result<P::Solana> {
    source
        .solana()
        .filter(|provider| provider.is_phantom())
        .ok_or_else(|| {
            log::warn!("Phantom provider not injected");
            WalletError::ProviderNotFound(WalletKind::Phantom)
        })
}
