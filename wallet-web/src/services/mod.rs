//! Wallet services
//!
//! - [`provider`]: traits over injected wallet providers
//! - [`locator`]: picks the provider for a wallet kind
//! - [`controller`]: connect / disconnect lifecycle and selected chain
//! - [`chain_switch`]: EVM chain switching with registration fallback
//! - [`injected`]: browser bindings for `window.ethereum` / `window.solana`

pub mod chain_switch;
pub mod controller;
pub mod injected;
pub mod locator;
pub mod provider;

pub use chain_switch::SwitchOutcome;
pub use controller::ConnectionController;
pub use injected::BrowserProviders;
pub use locator::LocatedProvider;

#[cfg(test)]
mod tests;
