//! Application constants

// EIP-1193 request methods
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const WALLET_SWITCH_ETHEREUM_CHAIN: &str = "wallet_switchEthereumChain";
pub const WALLET_ADD_ETHEREUM_CHAIN: &str = "wallet_addEthereumChain";

// EIP-1193 provider error codes
pub const ERROR_CODE_USER_REJECTED: i64 = 4001;
pub const ERROR_CODE_UNRECOGNIZED_CHAIN: i64 = 4902;

// Identity flags injected wallets set on their provider objects
pub const FLAG_METAMASK: &str = "isMetaMask";
pub const FLAG_COINBASE: &str = "isCoinbaseWallet";
pub const FLAG_PHANTOM: &str = "isPhantom";

// UI constants
pub const SITE_TITLE: &str = "KRBYLAND";
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
