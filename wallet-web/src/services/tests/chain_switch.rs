//! # Chain Switcher Tests

use super::*;
use crate::error::WalletError;
use crate::services::chain_switch::{switch_chain, SwitchOutcome};
use crate::utils::constants::{
    ETH_REQUEST_ACCOUNTS, WALLET_ADD_ETHEREUM_CHAIN, WALLET_SWITCH_ETHEREUM_CHAIN,
};
use serde_json::json;
use shared::dto::wallet::WalletKind;

fn unrecognized_chain() -> ProviderError {
    ProviderError::new(4902, "Unrecognized chain ID \"0x89\". Try adding the chain using wallet_addEthereumChain first.")
}

/// MetaMask connected with address `0x123...`.
async fn connected_metamask() -> (FakeEvm, ConnectionController<FakeSource>) {
    let provider = FakeEvm::metamask();
    provider.respond(ETH_REQUEST_ACCOUNTS, Ok(json!(["0x1234567890abcdef1234567890abcdef12345678"])));
    let controller = test_controller(FakeSource::evm(provider.clone()));
    controller.connect(WalletKind::MetaMask).await.unwrap();
    (provider, controller)
}

/// Requests made after the initial `eth_requestAccounts`.
fn switch_calls(provider: &FakeEvm) -> Vec<(String, Value)> {
    provider.calls().into_iter().skip(1).collect()
}

#[tokio::test]
async fn test_switch_known_chain() {
    // Arrange
    let (provider, controller) = connected_metamask().await;

    // Act
    let outcome = controller.switch_chain("ARBITRUM").await.unwrap();

    // Assert
    assert_eq!(outcome, SwitchOutcome::Switched);
    assert_eq!(
        switch_calls(&provider),
        vec![(
            WALLET_SWITCH_ETHEREUM_CHAIN.to_string(),
            json!([{ "chainId": "0xa4b1" }])
        )]
    );
    assert_eq!(controller.selected_chain(), "ARBITRUM");
}

#[tokio::test]
async fn test_unrecognized_chain_registers_once_without_retry() {
    // Arrange
    let (provider, controller) = connected_metamask().await;
    provider.respond(WALLET_SWITCH_ETHEREUM_CHAIN, Err(unrecognized_chain()));

    // Act
    let outcome = controller.switch_chain("POLYGON").await.unwrap();

    // Assert
    assert_eq!(outcome, SwitchOutcome::Registered);
    assert_eq!(
        switch_calls(&provider),
        vec![
            (
                WALLET_SWITCH_ETHEREUM_CHAIN.to_string(),
                json!([{ "chainId": "0x89" }])
            ),
            (
                WALLET_ADD_ETHEREUM_CHAIN.to_string(),
                json!([{
                    "chainId": "0x89",
                    "chainName": "Polygon Mainnet",
                    "nativeCurrency": { "name": "MATIC", "symbol": "MATIC", "decimals": 18 },
                    "rpcUrls": ["https://polygon-rpc.com/"],
                    "blockExplorerUrls": ["https://polygonscan.com/"]
                }])
            ),
        ]
    );
}

#[tokio::test]
async fn test_registration_failure() {
    let (provider, controller) = connected_metamask().await;
    provider.respond(WALLET_SWITCH_ETHEREUM_CHAIN, Err(unrecognized_chain()));
    provider.respond(
        WALLET_ADD_ETHEREUM_CHAIN,
        Err(ProviderError::new(4001, "User rejected the request.")),
    );

    let result = controller.switch_chain("BASE").await;

    match result {
        Err(WalletError::ChainRegistrationFailed { chain, source }) => {
            assert_eq!(chain, "Base Mainnet");
            assert_eq!(source.code, Some(4001));
        }
        other => panic!("expected ChainRegistrationFailed, got {:?}", other),
    }
    assert_eq!(
        provider.methods(),
        vec![ETH_REQUEST_ACCOUNTS, WALLET_SWITCH_ETHEREUM_CHAIN, WALLET_ADD_ETHEREUM_CHAIN]
    );
}

#[tokio::test]
async fn test_other_errors_keep_selected_chain() {
    let (provider, controller) = connected_metamask().await;
    provider.respond(
        WALLET_SWITCH_ETHEREUM_CHAIN,
        Err(ProviderError::new(-32002, "Request already pending")),
    );

    let result = controller.switch_chain("AVALANCHE").await;

    assert_eq!(
        result,
        Err(WalletError::Provider(ProviderError::new(-32002, "Request already pending")))
    );
    assert_eq!(controller.selected_chain(), "AVALANCHE");
    assert_eq!(switch_calls(&provider).len(), 1);
}

#[tokio::test]
async fn test_user_rejects_switch() {
    let (provider, controller) = connected_metamask().await;
    provider.respond(
        WALLET_SWITCH_ETHEREUM_CHAIN,
        Err(ProviderError::new(4001, "User rejected the request.")),
    );

    assert_eq!(controller.switch_chain("BASE").await, Err(WalletError::UserRejected));
    assert_eq!(switch_calls(&provider).len(), 1);
}

#[tokio::test]
async fn test_switch_with_phantom_short_circuits() {
    // Arrange
    let evm = FakeEvm::metamask();
    let phantom = FakeSolana::phantom(Ok(SOLANA_ADDRESS.to_string()));
    let controller = test_controller(FakeSource::evm(evm.clone()).with_solana(phantom.clone()));
    controller.connect(WalletKind::Phantom).await.unwrap();

    // Act
    let result = controller.switch_chain("POLYGON").await;

    // Assert
    assert_eq!(result, Err(WalletError::NoActiveEvmWallet));
    assert!(evm.calls().is_empty());
    assert_eq!(phantom.connects(), 1);
}

#[tokio::test]
async fn test_switch_when_disconnected() {
    let evm = FakeEvm::metamask();
    let controller = test_controller(FakeSource::evm(evm.clone()));

    assert_eq!(controller.switch_chain("POLYGON").await, Err(WalletError::NoActiveEvmWallet));
    assert!(evm.calls().is_empty());
}

#[tokio::test]
async fn test_switch_after_failed_connect() {
    // kind is recorded as MetaMask but no address came back.
    let evm = FakeEvm::metamask();
    evm.respond(ETH_REQUEST_ACCOUNTS, Err(ProviderError::new(4001, "User rejected the request.")));
    let controller = test_controller(FakeSource::evm(evm.clone()));
    let _ = controller.connect(WalletKind::MetaMask).await;

    assert_eq!(controller.switch_chain("BASE").await, Err(WalletError::NoActiveEvmWallet));
    assert_eq!(evm.methods(), vec![ETH_REQUEST_ACCOUNTS]);
}

#[tokio::test]
async fn test_unknown_chain_key() {
    let (provider, controller) = connected_metamask().await;

    let result = controller.switch_chain("FANTOM").await;

    assert_eq!(result, Err(WalletError::UnknownChain("FANTOM".to_string())));
    assert_eq!(controller.selected_chain(), "ETHEREUM");
    assert!(switch_calls(&provider).is_empty());
}

#[tokio::test]
async fn test_switch_chain_directly_on_provider() {
    let provider = FakeEvm::coinbase();
    let config = WalletConfig::load().unwrap();
    let base = &config.chains.require("BASE").unwrap().descriptor;

    let outcome = switch_chain(&provider, base).await.unwrap();

    assert_eq!(outcome, SwitchOutcome::Switched);
    assert_eq!(provider.methods(), vec![WALLET_SWITCH_ETHEREUM_CHAIN]);
}

#[test]
fn test_select_chain_is_independent_of_wallet() {
    let controller = test_controller(FakeSource::default());
    assert_eq!(controller.selected_chain(), "ETHEREUM");

    controller.select_chain("BASE").unwrap();
    assert_eq!(controller.selected_chain(), "BASE");
    assert_eq!(
        controller.selected_chain_entry().unwrap().descriptor.chain_id,
        "0x2105"
    );

    assert_eq!(
        controller.select_chain("NOPE"),
        Err(WalletError::UnknownChain("NOPE".to_string()))
    );
    assert_eq!(controller.selected_chain(), "BASE");
}
