//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with injected wallet providers and loaded from
//! configuration.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet kinds and the networks they connect on
//! - [`chain`] - Chain descriptors and chain switch / registration parameters
//!
//! ## Serialization Format
//!
//! - **Chain payloads**: camelCase, matching the EIP-1193 request params
//! - **Wallet kinds**: lowercase strings (`"metamask"`, `"coinbase"`, `"phantom"`)
//! - **Networks**: upper-case strings (`"EVM"`, `"SOLANA"`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! request({
//!   "method": "wallet_switchEthereumChain",
//!   "params": [{ "chainId": "0xa4b1" }]
//! })
//! ```

pub mod chain;
pub mod wallet;

pub use chain::*;
pub use wallet::*;
