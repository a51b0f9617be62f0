//! Connection Controller
//!
//! Owns the page's single [`ConnectionState`] and the user's selected chain.
//! Every operation is started by a click and runs on the browser's event
//! loop, so state lives in `Cell`/`RefCell` and no borrow is held across an
//! `.await`.
//!
//! Connect attempts are serialized: a second `connect` while one is pending
//! fails with [`WalletError::ConnectInFlight`] instead of racing it.

use std::cell::{Cell, RefCell};

use serde_json::{json, Value};
use shared::dto::wallet::{Network, WalletKind};

use super::chain_switch::{self, SwitchOutcome};
use super::locator::{locate, locate_evm, LocatedProvider};
use super::provider::{Eip1193Provider, ProviderSource, SolanaProvider};
use crate::config::{ChainEntry, WalletConfig};
use crate::error::{Result, WalletError};
use crate::state::connection::ConnectionState;
use crate::utils::constants::ETH_REQUEST_ACCOUNTS;

type Listener = Box<dyn Fn(&ConnectionState)>;

pub struct ConnectionController<P: ProviderSource> {
    source: P,
    config: WalletConfig,
    state: RefCell<ConnectionState>,
    selected_chain: RefCell<String>,
    connecting: Cell<bool>,
    // Bumped by every connect and disconnect; a pending connect whose
    // attempt number is stale drops its result.
    attempt: Cell<u64>,
    listener: Option<Listener>,
}

impl<P: ProviderSource> ConnectionController<P> {
    pub fn new(source: P, config: WalletConfig) -> Self {
        let selected_chain = RefCell::new(config.default_chain.clone());
        Self {
            source,
            config,
            state: RefCell::new(ConnectionState::default()),
            selected_chain,
            connecting: Cell::new(false),
            attempt: Cell::new(0),
            listener: None,
        }
    }

    /// Call `listener` with a snapshot after every state change.
    pub fn with_listener(mut self, listener: impl Fn(&ConnectionState) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().is_connected()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    pub fn display_address(&self) -> Option<String> {
        self.state.borrow().display_address()
    }

    /// Connect `kind`, superseding whatever was connected before.
    ///
    /// Returns the connected address. On failure the state is left with
    /// `kind` recorded and no address.
    pub async fn connect(&self, kind: WalletKind) -> Result<String> {
        if self.connecting.get() {
            log::warn!("Ignoring {} connect: another connect is in flight", kind);
            return Err(WalletError::ConnectInFlight);
        }
        if !self.config.supports(kind) {
            return Err(WalletError::UnsupportedWallet(kind));
        }

        self.connecting.set(true);
        let _in_flight = InFlight(&self.connecting);
        let attempt = self.next_attempt();

        self.update(|state| state.begin_connect(kind));
        log::info!("Connecting {} wallet", kind);

        let result = self.request_account(kind).await;

        if self.attempt.get() != attempt {
            log::info!("Discarding {} connect result: wallet was disconnected", kind);
            return Err(WalletError::ConnectCancelled);
        }

        match result {
            Ok((address, network)) => {
                log::info!("{} connected on {}", kind, network);
                self.update(|state| state.complete_connect(address.clone(), network));
                Ok(address)
            }
            Err(err) => {
                log::warn!("Failed to connect {} wallet: {}", kind, err);
                Err(err)
            }
        }
    }

    /// Forget the current connection. Injected wallets have no programmatic
    /// disconnect, so this only resets local state.
    pub fn disconnect(&self) {
        self.next_attempt();
        if self.state.borrow().is_empty() {
            return;
        }
        log::info!("Wallet disconnected");
        self.update(ConnectionState::reset);
    }

    pub fn selected_chain(&self) -> String {
        self.selected_chain.borrow().clone()
    }

    pub fn selected_chain_entry(&self) -> Option<ChainEntry> {
        self.config.chains.get(&self.selected_chain.borrow()).cloned()
    }

    /// Record the user's chain choice without contacting the wallet.
    pub fn select_chain(&self, key: &str) -> Result<()> {
        self.config.chains.require(key)?;
        *self.selected_chain.borrow_mut() = key.to_string();
        Ok(())
    }

    /// Select `key` and ask the connected EVM wallet to switch to it.
    ///
    /// The selection is kept even if the wallet refuses.
    pub async fn switch_chain(&self, key: &str) -> Result<SwitchOutcome> {
        let chain = self.config.chains.require(key)?.descriptor.clone();
        self.select_chain(key)?;

        let kind = {
            let state = self.state.borrow();
            if !state.has_evm_wallet() {
                log::warn!("Chain switch to {} requested without an EVM wallet", key);
                return Err(WalletError::NoActiveEvmWallet);
            }
            state.kind
        };

        let provider = locate_evm(&self.source, kind)?;
        chain_switch::switch_chain(&provider, &chain).await
    }

    async fn request_account(&self, kind: WalletKind) -> Result<(String, Network)> {
        match locate(&self.source, kind)? {
            LocatedProvider::Evm(provider) => {
                let accounts = provider
                    .request(ETH_REQUEST_ACCOUNTS, json!([]))
                    .await
                    .map_err(WalletError::from_provider)?;
                Ok((first_account(&accounts)?, Network::Evm))
            }
            LocatedProvider::Solana(provider) => {
                let public_key = provider
                    .connect()
                    .await
                    .map_err(WalletError::from_provider)?;
                Ok((public_key, Network::Solana))
            }
        }
    }

    fn next_attempt(&self) -> u64 {
        let attempt = self.attempt.get().wrapping_add(1);
        self.attempt.set(attempt);
        attempt
    }

    fn update(&self, f: impl FnOnce(&mut ConnectionState)) {
        f(&mut self.state.borrow_mut());
        if let Some(listener) = &self.listener {
            let snapshot = self.state.borrow().clone();
            listener(&snapshot);
        }
    }
}

fn first_account(accounts: &Value) -> Result<String> {
    accounts
        .as_array()
        .and_then(|list| list.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(WalletError::NoAccounts)
}

/// Clears the in-flight flag when the connect future finishes or is dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
