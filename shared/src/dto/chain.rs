use serde::{Deserialize, Serialize};

/// Native currency block of an EIP-3085 chain definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Static description of an EVM network, shaped like the single parameter of
/// `wallet_addEthereumChain`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// `0x`-prefixed hexadecimal chain id, e.g. `"0x89"`.
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl ChainDescriptor {
    /// Decimal chain id, or `None` when `chain_id` is not `0x`-prefixed hex.
    pub fn chain_id_decimal(&self) -> Option<u64> {
        let digits = self
            .chain_id
            .strip_prefix("0x")
            .or_else(|| self.chain_id.strip_prefix("0X"))?;
        u64::from_str_radix(digits, 16).ok()
    }
}

/// Parameter of `wallet_switchEthereumChain` (EIP-3326).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchEthereumChainParameter {
    pub chain_id: String,
}

impl From<&ChainDescriptor> for SwitchEthereumChainParameter {
    fn from(chain: &ChainDescriptor) -> Self {
        Self {
            chain_id: chain.chain_id.clone(),
        }
    }
}

/// Parameter of `wallet_addEthereumChain` (EIP-3085).
pub type AddEthereumChainParameter = ChainDescriptor;
