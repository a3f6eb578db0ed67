//! Identity ledger capability
//!
//! [`IdentityLedger`] is the whole integration contract with a ledger
//! backend: five operations and their return shapes. [`MockLedger`] is the
//! only implementation shipped; it logs its arguments and answers with
//! fixed literals.

use std::fmt;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::identity::Identity;

/// Identity record as returned by a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    pub name: String,
    pub email: String,
    pub image_ref: String,
    pub verified: bool,
}

impl From<IdentityInfo> for Identity {
    fn from(info: IdentityInfo) -> Self {
        Identity {
            name: info.name,
            email: info.email,
            image_ref: info.image_ref,
            verified: info.verified,
        }
    }
}

/// The ledger operations, named as in error messages and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerOperation {
    HasIdentity,
    CreateIdentity,
    GetIdentityInfo,
    AddCredential,
    VerifyIdentity,
}

impl fmt::Display for LedgerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerOperation::HasIdentity => write!(f, "has_identity"),
            LedgerOperation::CreateIdentity => write!(f, "create_identity"),
            LedgerOperation::GetIdentityInfo => write!(f, "get_identity_info"),
            LedgerOperation::AddCredential => write!(f, "add_credential"),
            LedgerOperation::VerifyIdentity => write!(f, "verify_identity"),
        }
    }
}

/// Receipt for a submitted mutating call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub id: Uuid,
    pub operation: LedgerOperation,
}

impl PendingTransaction {
    pub fn new(operation: LedgerOperation) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation,
        }
    }

    /// Wait for confirmation. Transactions from the mock are confirmed
    /// on submission.
    pub async fn wait(&self) -> Result<(), LedgerError> {
        Ok(())
    }
}

/// The five operations a ledger backend must offer
#[async_trait]
pub trait IdentityLedger: Send + Sync {
    /// Whether `account` already owns an identity.
    async fn has_identity(&self, account: &str) -> Result<bool, LedgerError>;

    /// Register a new identity for the calling account.
    async fn create_identity(
        &self,
        name: &str,
        email: &str,
        image_ref: &str,
    ) -> Result<PendingTransaction, LedgerError>;

    /// Fetch the identity record for `account`.
    async fn get_identity_info(&self, account: &str) -> Result<IdentityInfo, LedgerError>;

    /// Attach a credential to the caller's identity.
    async fn add_credential(&self, kind: &str, hash: &str)
    -> Result<PendingTransaction, LedgerError>;

    /// Request verification of the caller's identity.
    async fn verify_identity(&self) -> Result<PendingTransaction, LedgerError>;
}

/// A call observed by [`MockLedger`], with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCall {
    HasIdentity { account: String },
    CreateIdentity { name: String, email: String, image_ref: String },
    GetIdentityInfo { account: String },
    AddCredential { kind: String, hash: String },
    VerifyIdentity,
}

impl LedgerCall {
    pub fn operation(&self) -> LedgerOperation {
        match self {
            LedgerCall::HasIdentity { .. } => LedgerOperation::HasIdentity,
            LedgerCall::CreateIdentity { .. } => LedgerOperation::CreateIdentity,
            LedgerCall::GetIdentityInfo { .. } => LedgerOperation::GetIdentityInfo,
            LedgerCall::AddCredential { .. } => LedgerOperation::AddCredential,
            LedgerCall::VerifyIdentity => LedgerOperation::VerifyIdentity,
        }
    }
}

/// In-memory stand-in for a ledger contract
///
/// Answers with fixed literals, records every call in order and can be
/// told to reject everything.
#[derive(Debug, Default)]
pub struct MockLedger {
    calls: Mutex<Vec<LedgerCall>>,
    rejection: Option<String>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that rejects every call with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rejection: Some(reason.into()),
        }
    }

    /// Calls seen so far, oldest first.
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.calls.lock().clone()
    }

    /// Number of calls matching `pred`.
    pub fn count_calls(&self, pred: impl Fn(&LedgerCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: LedgerCall) -> Result<(), LedgerError> {
        let operation = call.operation();
        self.calls.lock().push(call);
        match &self.rejection {
            Some(reason) => {
                tracing::error!(%operation, reason = %reason, "Mock rejecting call");
                Err(LedgerError::Rejected {
                    operation,
                    reason: reason.clone(),
                })
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityLedger for MockLedger {
    async fn has_identity(&self, account: &str) -> Result<bool, LedgerError> {
        self.record(LedgerCall::HasIdentity {
            account: account.to_string(),
        })?;
        Ok(false)
    }

    async fn create_identity(
        &self,
        name: &str,
        email: &str,
        image_ref: &str,
    ) -> Result<PendingTransaction, LedgerError> {
        tracing::info!(name, email, image_ref, "Mock creating identity");
        self.record(LedgerCall::CreateIdentity {
            name: name.to_string(),
            email: email.to_string(),
            image_ref: image_ref.to_string(),
        })?;
        Ok(PendingTransaction::new(LedgerOperation::CreateIdentity))
    }

    async fn get_identity_info(&self, account: &str) -> Result<IdentityInfo, LedgerError> {
        self.record(LedgerCall::GetIdentityInfo {
            account: account.to_string(),
        })?;
        Ok(IdentityInfo {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            image_ref: "QmHash123".to_string(),
            verified: false,
        })
    }

    async fn add_credential(
        &self,
        kind: &str,
        hash: &str,
    ) -> Result<PendingTransaction, LedgerError> {
        tracing::info!(kind, hash, "Mock adding credential");
        self.record(LedgerCall::AddCredential {
            kind: kind.to_string(),
            hash: hash.to_string(),
        })?;
        Ok(PendingTransaction::new(LedgerOperation::AddCredential))
    }

    async fn verify_identity(&self) -> Result<PendingTransaction, LedgerError> {
        tracing::info!("Mock verifying identity");
        self.record(LedgerCall::VerifyIdentity)?;
        Ok(PendingTransaction::new(LedgerOperation::VerifyIdentity))
    }
}
