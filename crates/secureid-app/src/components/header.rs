//! Top bar with the product name and connected account.

use dioxus::prelude::*;
use secureid_core::short_account;

#[component]
pub fn Header(account: String) -> Element {
    let short = short_account(&account);

    rsx! {
        header { class: "app-header",
            div { class: "brand",
                span { class: "brand-mark", "🛡" }
                h1 { class: "brand-name", "SecureID" }
            }

            if account.is_empty() {
                button { class: "connect-button", "Connect Wallet" }
            } else {
                div { class: "account-pill", title: "{account}",
                    span { class: "account-dot" }
                    span { class: "account-text", "{short}" }
                }
            }
        }
    }
}
