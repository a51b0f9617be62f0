//! # Wallet Service Tests
//!
//! Scenario tests for the locator, controller and chain switcher, run against
//! in-memory fake providers.

mod chain_switch;

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde_json::Value;
use tokio::sync::oneshot;

use super::provider::{Eip1193Provider, ProviderFlags, ProviderSource, SolanaProvider};
use super::ConnectionController;
use crate::config::WalletConfig;
use crate::error::ProviderError;

type Scripted = Rc<RefCell<HashMap<String, VecDeque<Result<Value, ProviderError>>>>>;
type Gate = Rc<RefCell<Option<oneshot::Receiver<()>>>>;

/// Wait on the gate, if one is armed, so a test can hold a request open.
async fn pass_gate(gate: &Gate) {
    let receiver = gate.borrow_mut().take();
    if let Some(receiver) = receiver {
        let _ = receiver.await;
    }
}

fn arm_gate(gate: &Gate) -> oneshot::Sender<()> {
    let (sender, receiver) = oneshot::channel();
    *gate.borrow_mut() = Some(receiver);
    sender
}

/// Scriptable EIP-1193 provider that records every request.
#[derive(Clone, Default)]
pub struct FakeEvm {
    pub name: &'static str,
    flags: ProviderFlags,
    providers: Vec<FakeEvm>,
    responses: Scripted,
    calls: Rc<RefCell<Vec<(String, Value)>>>,
    gate: Gate,
}

impl FakeEvm {
    pub fn new(name: &'static str, flags: ProviderFlags) -> Self {
        Self {
            name,
            flags,
            ..Self::default()
        }
    }

    pub fn metamask() -> Self {
        Self::new("metamask", ProviderFlags::metamask())
    }

    pub fn coinbase() -> Self {
        Self::new("coinbase", ProviderFlags::coinbase())
    }

    /// Aggregate exposing `providers` and no identity flags of its own.
    pub fn aggregate(providers: Vec<FakeEvm>) -> Self {
        Self {
            name: "aggregate",
            providers,
            ..Self::default()
        }
    }

    /// Queue the answer to the next `method` request. Unscripted requests
    /// resolve to `null`.
    pub fn respond(&self, method: &str, result: Result<Value, ProviderError>) -> &Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub fn hold_next_request(&self) -> oneshot::Sender<()> {
        arm_gate(&self.gate)
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(method, _)| method.clone()).collect()
    }
}

impl Eip1193Provider for FakeEvm {
    fn flags(&self) -> ProviderFlags {
        self.flags
    }

    fn providers(&self) -> Vec<Self> {
        self.providers.clone()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        pass_gate(&self.gate).await;

        let scripted = self
            .responses
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        scripted.unwrap_or(Ok(Value::Null))
    }
}

/// Scriptable Solana provider.
#[derive(Clone, Default)]
pub struct FakeSolana {
    is_phantom: bool,
    result: Rc<RefCell<Option<Result<String, ProviderError>>>>,
    connects: Rc<Cell<usize>>,
    gate: Gate,
}

impl FakeSolana {
    pub fn phantom(result: Result<String, ProviderError>) -> Self {
        Self {
            is_phantom: true,
            result: Rc::new(RefCell::new(Some(result))),
            ..Self::default()
        }
    }

    /// A `window.solana` injected by some other wallet.
    pub fn impostor() -> Self {
        Self {
            result: Rc::new(RefCell::new(Some(Ok("impostor".to_string())))),
            ..Self::default()
        }
    }

    pub fn hold_next_connect(&self) -> oneshot::Sender<()> {
        arm_gate(&self.gate)
    }

    pub fn connects(&self) -> usize {
        self.connects.get()
    }
}

impl SolanaProvider for FakeSolana {
    fn is_phantom(&self) -> bool {
        self.is_phantom
    }

    async fn connect(&self) -> Result<String, ProviderError> {
        self.connects.set(self.connects.get() + 1);
        pass_gate(&self.gate).await;

        self.result
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(ProviderError::without_code("not scripted")))
    }
}

#[derive(Clone, Default)]
pub struct FakeSource {
    pub ethereum: Option<FakeEvm>,
    pub solana: Option<FakeSolana>,
}

impl FakeSource {
    pub fn evm(provider: FakeEvm) -> Self {
        Self {
            ethereum: Some(provider),
            solana: None,
        }
    }

    pub fn with_solana(mut self, provider: FakeSolana) -> Self {
        self.solana = Some(provider);
        self
    }
}

impl ProviderSource for FakeSource {
    type Evm = FakeEvm;
    type Solana = FakeSolana;

    fn ethereum(&self) -> Option<FakeEvm> {
        self.ethereum.clone()
    }

    fn solana(&self) -> Option<FakeSolana> {
        self.solana.clone()
    }
}

pub const EVM_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
pub const SOLANA_ADDRESS: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

/// Controller over the shipped configuration.
pub fn test_controller(source: FakeSource) -> ConnectionController<FakeSource> {
    let config = WalletConfig::load().expect("embedded config should load in test");
    ConnectionController::new(source, config)
}
