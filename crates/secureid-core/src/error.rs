//! Error types for SecureID

use thiserror::Error;

use crate::ledger::LedgerOperation;

/// Top-level error type for SecureID
#[derive(Debug, Error)]
pub enum SecureIdError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors returned by an identity ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{operation} rejected: {reason}")]
    Rejected {
        operation: LedgerOperation,
        reason: String,
    },
}

/// Errors from a wallet-like account provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("No wallet provider available")]
    NotAvailable,

    #[error("Account request failed: {0}")]
    RequestFailed(String),

    #[error("Wallet returned no accounts")]
    NoAccounts,
}

/// Form validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all required fields")]
    MissingIdentityFields,

    #[error("Please fill out both credential fields")]
    MissingCredentialFields,
}

/// Errors while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingIdentityFields.to_string(),
            "Please fill out all required fields"
        );
        assert_eq!(
            ValidationError::MissingCredentialFields.to_string(),
            "Please fill out both credential fields"
        );
    }

    #[test]
    fn ledger_error_converts_into_top_level() {
        let err: SecureIdError = LedgerError::Rejected {
            operation: LedgerOperation::CreateIdentity,
            reason: "offline".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Ledger error: create_identity rejected: offline"
        );
    }
}
