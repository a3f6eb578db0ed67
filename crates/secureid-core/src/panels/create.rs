//! Identity creation form.

use tracing::instrument;

use crate::clock::Scheduler;
use crate::config::Timings;
use crate::error::{LedgerError, ValidationError};
use crate::identity::{IdentityDraft, PLACEHOLDER_IMAGE_REF};
use crate::ledger::IdentityLedger;

/// Shown when the ledger rejects the create call.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create identity. Please try again.";

/// Submission status of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

/// State of the create-identity panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateIdentityForm {
    pub name: String,
    pub email: String,
    /// Data URL of a locally picked image, for preview only.
    pub image_preview: Option<String>,
    pub status: FormStatus,
    pub error: Option<String>,
}

impl CreateIdentityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Creating Identity..."
        } else {
            "Create Identity"
        }
    }

    /// Validate and enter the submitting state.
    ///
    /// Returns the draft to hand to [`submit_identity`], or `None` when the
    /// form is already submitting or a required field is blank. A blank
    /// field sets the inline validation message.
    pub fn begin_submit(&mut self) -> Option<IdentityDraft> {
        if self.is_submitting() {
            return None;
        }
        self.error = None;

        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            self.error = Some(ValidationError::MissingIdentityFields.to_string());
            return None;
        }

        let draft = IdentityDraft {
            name: name.to_string(),
            email: email.to_string(),
            // Images are previewed locally but never uploaded.
            image_ref: PLACEHOLDER_IMAGE_REF.to_string(),
        };
        self.status = FormStatus::Submitting;
        Some(draft)
    }

    /// Leave the submitting state. Returns whether the identity was created.
    pub fn finish_submit(&mut self, outcome: &Result<(), LedgerError>) -> bool {
        self.status = FormStatus::Idle;
        match outcome {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error creating identity: {}", e);
                self.error = Some(CREATE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }
}

/// Send the draft to the ledger, then wait out the confirmation delay.
///
/// A rejected call returns immediately without waiting.
#[instrument(skip(ledger, scheduler, timings, draft), fields(name = %draft.name))]
pub async fn submit_identity(
    ledger: &dyn IdentityLedger,
    scheduler: &dyn Scheduler,
    timings: &Timings,
    draft: &IdentityDraft,
) -> Result<(), LedgerError> {
    let tx = ledger
        .create_identity(&draft.name, &draft.email, &draft.image_ref)
        .await?;
    tracing::debug!(tx = %tx.id, "Identity submitted");
    scheduler.sleep(timings.identity_confirmation()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerOperation;

    fn filled() -> CreateIdentityForm {
        CreateIdentityForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_fields_set_validation_message() {
        for (name, email) in [("", "a@b.c"), ("Ada", ""), ("  ", "a@b.c"), ("", "")] {
            let mut form = CreateIdentityForm {
                name: name.to_string(),
                email: email.to_string(),
                ..Default::default()
            };
            assert!(form.begin_submit().is_none());
            assert_eq!(form.error.as_deref(), Some("Please fill out all required fields"));
            assert_eq!(form.status, FormStatus::Idle);
        }
    }

    #[test]
    fn test_begin_submit_builds_draft() {
        let mut form = filled();
        form.image_preview = Some("data:image/png;base64,AAAA".to_string());
        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.image_ref, PLACEHOLDER_IMAGE_REF);
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Creating Identity...");
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut form = CreateIdentityForm::new();
        assert!(form.begin_submit().is_none());
        assert!(form.error.is_some());

        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        assert!(form.begin_submit().is_some());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_finish_submit_failure() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let created = form.finish_submit(&Err(LedgerError::Rejected {
            operation: LedgerOperation::CreateIdentity,
            reason: "rpc".to_string(),
        }));
        assert!(!created);
        assert_eq!(form.error.as_deref(), Some(CREATE_FAILED_MESSAGE));
        assert!(!form.is_submitting());
    }
}
