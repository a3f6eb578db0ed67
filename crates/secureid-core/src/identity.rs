//! Identity and credential records
//!
//! These are local demo records. Nothing here is validated beyond
//! "field is non-empty", and nothing is persisted.

use serde::{Deserialize, Serialize};

/// Image reference sent to the ledger in place of a real content hash.
pub const PLACEHOLDER_IMAGE_REF: &str = "QmXyZ123456789";

/// A locally displayed identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    /// Opaque reference to a profile image; never resolved.
    pub image_ref: String,
    pub verified: bool,
}

impl Identity {
    /// The identity shown by the view panel in demo mode.
    pub fn demo() -> Self {
        Self {
            name: "Demo User".to_string(),
            email: "demo@secureidentity.io".to_string(),
            image_ref: "QmHash123".to_string(),
            verified: false,
        }
    }

    /// Mark the identity verified. There is no way back.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

/// A credential attached to an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Kind of credential, e.g. "Passport".
    pub kind: String,
    /// Opaque hash string; not checked against any digest format.
    pub hash: String,
}

impl Credential {
    pub fn new(kind: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            hash: hash.into(),
        }
    }
}

/// Credentials shown alongside [`Identity::demo`], in display order.
pub fn demo_credentials() -> Vec<Credential> {
    vec![
        Credential::new("National ID", "0x7890..."),
        Credential::new("Driving License", "0xabcd..."),
    ]
}

/// Validated input for the ledger's create-identity call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityDraft {
    pub name: String,
    pub email: String,
    pub image_ref: String,
}

/// Abbreviate an account address for the header: `0x1234...5678`.
///
/// Addresses of ten characters or fewer are returned unchanged.
pub fn short_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() <= 10 {
        return account.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
