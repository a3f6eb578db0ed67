//! Identity view panel: profile, credential list, add and verify.

use tracing::instrument;

use crate::clock::Scheduler;
use crate::config::{ProfileSource, Timings};
use crate::error::{LedgerError, ValidationError};
use crate::identity::{demo_credentials, Credential, Identity};
use crate::ledger::IdentityLedger;

/// Shown when any ledger call from this panel is rejected.
pub const VIEW_FAILED_MESSAGE: &str = "Failed to update identity. Please try again.";

/// Identity plus its credentials, as loaded on mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub identity: Identity,
    pub credentials: Vec<Credential>,
}

impl Profile {
    pub fn demo() -> Self {
        Self {
            identity: Identity::demo(),
            credentials: demo_credentials(),
        }
    }
}

/// State of the identity view panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityViewer {
    pub identity: Identity,
    /// Insertion order is display order.
    pub credentials: Vec<Credential>,
    pub loading: bool,
    /// Draft "credential type" field.
    pub credential_kind: String,
    /// Draft "credential hash" field.
    pub credential_hash: String,
    pub adding: bool,
    pub verifying: bool,
    pub error: Option<String>,
}

impl Default for IdentityViewer {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            credentials: Vec::new(),
            loading: true,
            credential_kind: String::new(),
            credential_hash: String::new(),
            adding: false,
            verifying: false,
            error: None,
        }
    }
}

impl IdentityViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_profile(&mut self, result: Result<Profile, LedgerError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.identity = profile.identity;
                self.credentials = profile.credentials;
            }
            Err(e) => {
                tracing::error!("Error loading identity: {}", e);
                self.error = Some(VIEW_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn add_label(&self) -> &'static str {
        if self.adding {
            "Adding..."
        } else {
            "Add Credential"
        }
    }

    /// Validate the draft fields and enter the adding state.
    ///
    /// Returns `None` while another add is in flight or when either field
    /// is blank (which sets the inline message).
    pub fn begin_add_credential(&mut self) -> Option<Credential> {
        if self.adding {
            return None;
        }
        self.error = None;
        let kind = self.credential_kind.trim();
        let hash = self.credential_hash.trim();
        if kind.is_empty() || hash.is_empty() {
            self.error = Some(ValidationError::MissingCredentialFields.to_string());
            return None;
        }
        let credential = Credential::new(kind, hash);
        self.adding = true;
        Some(credential)
    }

    /// Append the confirmed credential and clear the draft fields.
    pub fn finish_add_credential(&mut self, result: Result<Credential, LedgerError>) {
        self.adding = false;
        match result {
            Ok(credential) => {
                tracing::debug!(kind = %credential.kind, "Credential appended");
                self.credentials.push(credential);
                self.credential_kind.clear();
                self.credential_hash.clear();
            }
            Err(e) => {
                tracing::error!("Error adding credential: {}", e);
                self.error = Some(VIEW_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Enter the verifying state. Refused once verified or while pending.
    pub fn begin_verify(&mut self) -> bool {
        if self.identity.verified || self.verifying {
            return false;
        }
        self.error = None;
        self.verifying = true;
        true
    }

    pub fn finish_verify(&mut self, result: Result<(), LedgerError>) {
        self.verifying = false;
        match result {
            Ok(()) => self.identity.mark_verified(),
            Err(e) => {
                tracing::error!("Error verifying identity: {}", e);
                self.error = Some(VIEW_FAILED_MESSAGE.to_string());
            }
        }
    }
}

/// Load the panel's profile after the fixed load delay.
#[instrument(skip(ledger, scheduler, timings))]
pub async fn load_profile(
    ledger: &dyn IdentityLedger,
    scheduler: &dyn Scheduler,
    timings: &Timings,
    source: ProfileSource,
    account: &str,
) -> Result<Profile, LedgerError> {
    let profile = match source {
        ProfileSource::Demo => Profile::demo(),
        ProfileSource::Ledger => Profile {
            identity: ledger.get_identity_info(account).await?.into(),
            credentials: Vec::new(),
        },
    };
    scheduler.sleep(timings.profile_load()).await;
    Ok(profile)
}

/// Submit a credential, then wait out the confirmation delay.
#[instrument(skip(ledger, scheduler, timings, credential), fields(kind = %credential.kind))]
pub async fn add_credential(
    ledger: &dyn IdentityLedger,
    scheduler: &dyn Scheduler,
    timings: &Timings,
    credential: Credential,
) -> Result<Credential, LedgerError> {
    ledger.add_credential(&credential.kind, &credential.hash).await?;
    scheduler.sleep(timings.credential_confirmation()).await;
    Ok(credential)
}

/// Request verification, then wait out the confirmation delay.
#[instrument(skip_all)]
pub async fn verify_identity(
    ledger: &dyn IdentityLedger,
    scheduler: &dyn Scheduler,
    timings: &Timings,
) -> Result<(), LedgerError> {
    ledger.verify_identity().await?;
    scheduler.sleep(timings.verification_confirmation()).await;
    Ok(())
}
