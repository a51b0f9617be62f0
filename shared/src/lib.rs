//! # Shared Wallet Types Library
//!
//! Plain data types and pure helpers used by the KRBYLAND wallet widget and
//! by anything else that needs to speak the same vocabulary.
//!
//! ## Structure
//!
//! - **[`dto`]**: Serializable data types
//!   - **[`dto::wallet`]**: Wallet kinds and networks
//!   - **[`dto::chain`]**: EVM chain descriptors and the EIP-3085 / EIP-3326 request payloads
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with the widget's default lengths
//!
//! ## Wire Format
//!
//! Chain descriptors serialize to exactly the JSON object injected EVM wallets
//! expect in `wallet_addEthereumChain`:
//!
//! ```rust
//! use shared::dto::chain::{ChainDescriptor, NativeCurrency};
//!
//! let polygon = ChainDescriptor {
//!     chain_id: "0x89".to_string(),
//!     chain_name: "Polygon Mainnet".to_string(),
//!     native_currency: NativeCurrency {
//!         name: "MATIC".to_string(),
//!         symbol: "MATIC".to_string(),
//!         decimals: 18,
//!     },
//!     rpc_urls: vec!["https://polygon-rpc.com".to_string()],
//!     block_explorer_urls: vec!["https://polygonscan.com".to_string()],
//! };
//!
//! let json = serde_json::to_value(&polygon).unwrap();
//! assert_eq!(json["chainId"], "0x89");
//! assert_eq!(json["nativeCurrency"]["decimals"], 18);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
