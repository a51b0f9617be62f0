//! Inline Notice Component

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

/// Shows the wallet context's current notice, with a dismiss button.
#[component]
pub fn InlineNotice() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        wallet_ctx.notice.get().map(|notice| {
            let class = format!("notice {}", notice.css_class());
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button
                        class="notice-dismiss"
                        on:click=move |_| wallet_ctx.notice.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
