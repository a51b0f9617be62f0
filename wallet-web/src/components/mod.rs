//! UI Components

pub mod chain_dropdown;
pub mod navbar;
pub mod notice;
pub mod wallet_connect;

pub use chain_dropdown::ChainDropdown;
pub use navbar::Navbar;
pub use notice::InlineNotice;
pub use wallet_connect::WalletConnect;
