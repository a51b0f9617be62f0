//! Wallet Connect Component
//!
//! One button per configured wallet while disconnected; the truncated
//! address, network, chain dropdown and a disconnect button once connected.

use leptos::logging::log;
use leptos::prelude::*;
use shared::dto::wallet::WalletKind;

use crate::components::{ChainDropdown, InlineNotice};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletConnect(
    /// Called after a wallet produced an address.
    #[prop(optional, into)]
    on_connect: Option<Callback<String>>,
) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let wallets = wallet_ctx.supported_wallets();

    if let Some(on_connect) = on_connect {
        Effect::new(move |_| {
            if let Some(address) = wallet_ctx.connection.with(|state| state.address.clone()) {
                on_connect.run(address);
            }
        });
    }

    let connect = move |kind: WalletKind| {
        log!("Wallet connect clicked: {}", kind.name());
        wallet_ctx.connect(kind);
    };

    let disconnect = move |_| {
        log!("Wallet disconnect clicked");
        wallet_ctx.disconnect();
    };

    view! {
        <div class="wallet-connect">
            {move || {
                if wallet_ctx.is_connected() {
                    let network = wallet_ctx
                        .connection
                        .with(|state| state.network.map(|network| network.name()).unwrap_or_default());
                    view! {
                        <div class="wallet-connected">
                            <span class="wallet-address">{wallet_ctx.display_address()}</span>
                            <span class="wallet-network">{network}</span>
                            <Show when=move || wallet_ctx.has_evm_wallet()>
                                <ChainDropdown/>
                            </Show>
                            <button class="pill-button" on:click=disconnect>
                                "Disconnect"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    let wallets = wallets.clone();
                    view! {
                        <div class="wallet-options">
                            {wallets
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <button
                                            class="wallet-button"
                                            disabled=move || wallet_ctx.connecting.get()
                                            on:click=move |_| connect(kind)
                                        >
                                            {format!("Connect {}", kind.name())}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
            <InlineNotice/>
        </div>
    }
}
