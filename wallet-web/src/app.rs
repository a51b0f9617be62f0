//! KRBYLAND Wallet App - Leptos Frontend

use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::WalletConfig;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    match WalletConfig::load() {
        Ok(config) => {
            provide_wallet_context(config);
            view! {
                <div class="app-container">
                    <Navbar/>
                </div>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("Wallet widget disabled: {}", err);
            view! {
                <div class="app-container">
                    <div class="notice error">{err.user_message()}</div>
                </div>
            }
            .into_any()
        }
    }
}
