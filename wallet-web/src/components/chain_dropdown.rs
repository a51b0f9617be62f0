//! Chain Dropdown Component
//!
//! Lists the configured EVM chains; picking one asks the connected wallet to
//! switch to it.

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ChainDropdown() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let chains = wallet_ctx.chains();
    let (open, set_open) = signal(false);

    let selected_name = {
        let chains = chains.clone();
        move || {
            let key = wallet_ctx.selected_chain.get();
            chains
                .iter()
                .find(|entry| entry.key == key)
                .map(|entry| entry.descriptor.chain_name.clone())
                .unwrap_or_else(|| "Select Chain".to_string())
        }
    };

    view! {
        <div class="chain-dropdown" style="position: relative; display: inline-block;">
            <button class="pill-button" on:click=move |_| set_open.update(|open| *open = !*open)>
                {selected_name}
            </button>

            <Show when=move || open.get()>
                <div class="chain-dropdown-menu">
                    {chains
                        .iter()
                        .map(|entry| {
                            let key = entry.key.clone();
                            let name = entry.descriptor.chain_name.clone();
                            view! {
                                <div
                                    class="chain-dropdown-item"
                                    on:click=move |_| {
                                        wallet_ctx.switch_chain(key.clone());
                                        set_open.set(false);
                                    }
                                >
                                    {name}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
