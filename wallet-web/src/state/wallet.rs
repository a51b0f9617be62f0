//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use shared::dto::wallet::WalletKind;

use crate::config::{ChainEntry, WalletConfig};
use crate::error::WalletError;
use crate::services::{BrowserProviders, ConnectionController, SwitchOutcome};
use crate::state::connection::ConnectionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Inline, non-blocking message shown under the wallet widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

impl From<&WalletError> for Notice {
    fn from(err: &WalletError) -> Self {
        let level = match err {
            WalletError::UserRejected
            | WalletError::ConnectInFlight
            | WalletError::ConnectCancelled
            | WalletError::NoActiveEvmWallet
            | WalletError::ProviderNotFound(_) => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        };
        Self {
            level,
            message: err.user_message(),
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connection: RwSignal<ConnectionState>,
    pub selected_chain: RwSignal<String>,
    pub connecting: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    controller: StoredValue<Rc<ConnectionController<BrowserProviders>>, LocalStorage>,
}

impl WalletContext {
    pub fn new(config: WalletConfig) -> Self {
        let connection = RwSignal::new(ConnectionState::default());
        let selected_chain = RwSignal::new(config.default_chain.clone());
        let controller = ConnectionController::new(BrowserProviders, config)
            .with_listener(move |state| connection.set(state.clone()));

        Self {
            connection,
            selected_chain,
            connecting: RwSignal::new(false),
            notice: RwSignal::new(None),
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.is_connected())
    }

    pub fn has_evm_wallet(&self) -> bool {
        self.connection.with(|state| state.has_evm_wallet())
    }

    pub fn display_address(&self) -> Option<String> {
        self.connection.with(|state| state.display_address())
    }

    pub fn supported_wallets(&self) -> Vec<WalletKind> {
        self.controller
            .with_value(|controller| controller.config().supported_wallets.clone())
    }

    pub fn chains(&self) -> Vec<ChainEntry> {
        self.controller
            .with_value(|controller| controller.config().chains.iter().cloned().collect())
    }

    pub fn connect(&self, kind: WalletKind) {
        let controller = self.controller.get_value();
        let (connecting, notice) = (self.connecting, self.notice);

        notice.set(None);
        connecting.set(true);
        leptos::task::spawn_local(async move {
            let result = controller.connect(kind).await;
            connecting.set(controller.is_connecting());
            if let Err(err) = result {
                if !matches!(err, WalletError::ConnectCancelled) {
                    notice.set(Some(Notice::from(&err)));
                }
            }
        });
    }

    pub fn disconnect(&self) {
        self.controller.with_value(|controller| controller.disconnect());
        self.notice.set(None);
    }

    pub fn switch_chain(&self, key: String) {
        let controller = self.controller.get_value();
        let (selected_chain, notice) = (self.selected_chain, self.notice);

        notice.set(None);
        leptos::task::spawn_local(async move {
            let result = controller.switch_chain(&key).await;
            selected_chain.set(controller.selected_chain());
            match result {
                Ok(SwitchOutcome::Switched) => {}
                Ok(SwitchOutcome::Registered) => {
                    let name = controller
                        .selected_chain_entry()
                        .map(|entry| entry.descriptor.chain_name)
                        .unwrap_or(key);
                    notice.set(Some(Notice::info(format!(
                        "{} was added to your wallet. If it did not switch automatically, select it again.",
                        name
                    ))));
                }
                Err(err) => notice.set(Some(Notice::from(&err))),
            }
        });
    }
}

pub fn provide_wallet_context(config: WalletConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
