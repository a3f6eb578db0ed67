//! Identity creation form.

use dioxus::prelude::*;
use secureid_core::panels::{submit_identity, CreateIdentityForm};
use tracing::Instrument;

use crate::file_utils::load_image_as_data_url;
use crate::services::Services;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

/// Form collecting name, email and an optional profile image.
///
/// Calls `on_created` once the ledger accepted the identity and the
/// confirmation delay has passed.
#[component]
pub fn CreateIdentity(on_created: EventHandler<()>) -> Element {
    let services = use_context::<Services>();
    let mut form = use_signal(CreateIdentityForm::new);

    let submit = move |_| {
        let Some(draft) = form.write().begin_submit() else {
            return;
        };
        let services = services.clone();
        let span = services.session.clone();
        spawn(
            async move {
                let outcome = submit_identity(
                    services.ledger.as_ref(),
                    services.scheduler.as_ref(),
                    &services.config.timings,
                    &draft,
                )
                .await;
                if form.write().finish_submit(&outcome) {
                    on_created.call(());
                }
            }
            .instrument(span),
        );
    };

    let pick_image = move |_| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Choose a profile image")
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await;
            let Some(file) = picked else {
                return;
            };
            if let Some(url) = load_image_as_data_url(file.path()) {
                form.write().image_preview = Some(url);
            }
        });
    };

    let current = form.read().clone();
    let label = current.submit_label();
    let busy = current.is_submitting();

    rsx! {
        div { class: "create-panel",
            h2 { class: "panel-title", "Create Your Decentralized Identity" }
            p { class: "panel-subtitle",
                "Your identity is anchored on the ledger and fully under your control."
            }

            div { class: "avatar-picker",
                if let Some(preview) = current.image_preview.clone() {
                    img { class: "avatar-preview", src: "{preview}", alt: "Profile preview" }
                } else {
                    div { class: "avatar-placeholder", "👤" }
                }
                button {
                    class: "secondary-button",
                    disabled: busy,
                    onclick: pick_image,
                    "Upload Image"
                }
            }

            label { class: "field-label", r#for: "identity-name", "Full Name *" }
            input {
                id: "identity-name",
                class: "field-input",
                r#type: "text",
                placeholder: "Enter your full name",
                value: "{current.name}",
                disabled: busy,
                oninput: move |evt| form.write().name = evt.value(),
            }

            label { class: "field-label", r#for: "identity-email", "Email Address *" }
            input {
                id: "identity-email",
                class: "field-input",
                r#type: "email",
                placeholder: "Enter your email address",
                value: "{current.email}",
                disabled: busy,
                oninput: move |evt| form.write().email = evt.value(),
            }

            if let Some(error) = current.error.clone() {
                div { class: "form-error", "{error}" }
            }

            button {
                class: "primary-button",
                disabled: busy,
                onclick: submit,
                "{label}"
            }
        }
    }
}
