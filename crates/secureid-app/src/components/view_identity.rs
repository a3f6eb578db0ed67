//! Identity viewer with credentials and verification.

use dioxus::prelude::*;
use secureid_core::panels::{add_credential, load_profile, verify_identity, IdentityViewer};
use tracing::Instrument;

use crate::services::Services;

#[component]
pub fn ViewIdentity(account: String) -> Element {
    let services = use_context::<Services>();
    let mut viewer = use_signal(IdentityViewer::new);

    {
        let services = services.clone();
        use_future(move || {
            let services = services.clone();
            let account = account.clone();
            let span = services.session.clone();
            async move {
                let result = load_profile(
                    services.ledger.as_ref(),
                    services.scheduler.as_ref(),
                    &services.config.timings,
                    services.config.profile_source,
                    &account,
                )
                .await;
                viewer.write().apply_profile(result);
            }
            .instrument(span)
        });
    }

    let on_add = {
        let services = services.clone();
        move |_| {
            let Some(credential) = viewer.write().begin_add_credential() else {
                return;
            };
            let services = services.clone();
            let span = services.session.clone();
            spawn(
                async move {
                    let result = add_credential(
                        services.ledger.as_ref(),
                        services.scheduler.as_ref(),
                        &services.config.timings,
                        credential,
                    )
                    .await;
                    viewer.write().finish_add_credential(result);
                }
                .instrument(span),
            );
        }
    };

    let on_verify = move |_| {
        if !viewer.write().begin_verify() {
            return;
        }
        let services = services.clone();
        let span = services.session.clone();
        spawn(
            async move {
                let result = verify_identity(
                    services.ledger.as_ref(),
                    services.scheduler.as_ref(),
                    &services.config.timings,
                )
                .await;
                viewer.write().finish_verify(result);
            }
            .instrument(span),
        );
    };

    let current = viewer.read().clone();

    if current.loading {
        return rsx! {
            div { class: "view-panel",
                div { class: "panel-loading", "Loading identity..." }
            }
        };
    }

    let identity = current.identity.clone();
    let add_label = current.add_label();
    let verify_label = if current.verifying {
        "Verifying..."
    } else {
        "Verify Identity"
    };

    rsx! {
        div { class: "view-panel",
            div { class: "identity-card",
                div { class: "avatar-placeholder", "👤" }
                div { class: "identity-details",
                    h2 { class: "identity-name", "{identity.name}" }
                    div { class: "identity-email", "{identity.email}" }
                    div { class: "identity-ref", "Image: {identity.image_ref}" }
                }
                if identity.verified {
                    span { class: "badge badge-verified", "✓ Verified" }
                } else {
                    span { class: "badge badge-unverified", "Unverified" }
                }
            }

            if !identity.verified {
                button {
                    class: "primary-button",
                    disabled: current.verifying,
                    onclick: on_verify,
                    "{verify_label}"
                }
            }

            h3 { class: "section-title", "Credentials" }
            if current.credentials.is_empty() {
                div { class: "empty-state", "No credentials added yet" }
            } else {
                ul { class: "credential-list",
                    for (idx, credential) in current.credentials.iter().enumerate() {
                        li { key: "{idx}", class: "credential-item",
                            span { class: "credential-kind", "{credential.kind}" }
                            span { class: "credential-hash", "{credential.hash}" }
                        }
                    }
                }
            }

            h3 { class: "section-title", "Add Credential" }
            div { class: "credential-form",
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Credential type (e.g. Passport)",
                    value: "{current.credential_kind}",
                    disabled: current.adding,
                    oninput: move |evt| viewer.write().credential_kind = evt.value(),
                }
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Credential hash",
                    value: "{current.credential_hash}",
                    disabled: current.adding,
                    oninput: move |evt| viewer.write().credential_hash = evt.value(),
                }
                button {
                    class: "secondary-button",
                    disabled: current.adding,
                    onclick: on_add,
                    "{add_label}"
                }
            }

            if let Some(error) = current.error.clone() {
                div { class: "form-error", "{error}" }
            }
        }
    }
}
