//! Navigation Bar Component

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::WalletConnect;
use crate::utils::constants::SITE_TITLE;

#[component]
pub fn Navbar() -> impl IntoView {
    let on_connect = Callback::new(|address: String| {
        log!("Wallet connected ({} chars)", address.len());
    });

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <a href="/" class="nav-link-clean">
                    <span class="nav-title">{SITE_TITLE}</span>
                </a>
                <WalletConnect on_connect=on_connect/>
            </div>
        </nav>
    }
}
