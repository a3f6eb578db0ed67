//! Root component: loading screen, tab switcher and floating chat.

use dioxus::prelude::*;
use secureid_core::panels::{start_session, ShellState, Tab};
use tracing::Instrument;

use crate::services::launch_services;

/// Root application component.
#[component]
pub fn App() -> Element {
    let services = use_context_provider(launch_services);
    let mut shell = use_signal(ShellState::new);

    // Resolve the account once on mount
    use_future(move || {
        let services = services.clone();
        let span = services.session.clone();
        async move {
            let session = start_session(
                services.wallet.as_deref(),
                services.ledger.as_ref(),
                &services.config.placeholder_account,
            )
            .await;
            tracing::info!(account = %session.account, "Session started");
            shell.write().connected(session);
        }
        .instrument(span)
    });

    let state = shell.read().clone();

    if state.loading {
        return rsx! {
            div { class: "loading-screen",
                div { class: "loading-text", "Loading SecureID..." }
            }
        };
    }

    let tab_class = |tab: Tab| {
        if state.active_tab == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };
    let create_class = tab_class(Tab::Create);
    let view_class = tab_class(Tab::View);
    let account = state.account.clone();

    rsx! {
        div { class: "app-root",
            super::header::Header { account: state.account.clone() }

            main { class: "app-main",
                div { class: "card",
                    div { class: "tab-bar",
                        button {
                            class: "{create_class}",
                            onclick: move |_| {
                                shell.write().select_tab(Tab::Create);
                            },
                            "Create Identity"
                        }
                        button {
                            class: "{view_class}",
                            disabled: !state.can_view(),
                            onclick: move |_| {
                                shell.write().select_tab(Tab::View);
                            },
                            "View Identity"
                        }
                    }

                    div { class: "card-body",
                        {
                            match state.active_tab {
                                Tab::Create => rsx! {
                                    super::create_identity::CreateIdentity {
                                        on_created: move |_| shell.write().identity_created(),
                                    }
                                },
                                Tab::View => rsx! {
                                    super::view_identity::ViewIdentity { account }
                                },
                            }
                        }
                    }
                }
            }

            button {
                class: "chat-toggle",
                title: "Ask the SecureID assistant",
                onclick: move |_| shell.write().toggle_chat(),
                "💬"
            }

            if state.chat_open {
                div { class: "chat-popover",
                    super::chat_bot::ChatBot {
                        on_close: move |_| shell.write().toggle_chat(),
                    }
                }
            }
        }
    }
}
