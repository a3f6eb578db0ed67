//! # SecureID Core
//!
//! Domain logic for the SecureID identity demo: identity and credential
//! records, the rule-based assistant, and per-panel state machines.
//!
//! External effects sit behind narrow capability traits so the desktop
//! app and tests can plug in different implementations:
//!
//! - [`IdentityLedger`]: the five ledger operations ([`MockLedger`] ships)
//! - [`WalletProvider`]: where the connected account comes from
//! - [`Scheduler`]: fixed delays ([`TokioScheduler`] in the app,
//!   [`ManualScheduler`] in tests)

pub mod assistant;
pub mod clock;
pub mod config;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod panels;
pub mod wallet;

pub use assistant::{canned_reply, classify, ReplyTopic, GREETING};
pub use clock::{ManualScheduler, Scheduler, TokioScheduler};
pub use config::{AppConfig, LaunchOverrides, ProfileSource, Timings, WindowConfig};
pub use error::*;
pub use identity::{
    demo_credentials, short_account, Credential, Identity, IdentityDraft, PLACEHOLDER_IMAGE_REF,
};
pub use ledger::{
    IdentityInfo, IdentityLedger, LedgerCall, LedgerOperation, MockLedger, PendingTransaction,
};
pub use wallet::{connect_account, StaticWallet, WalletProvider, PLACEHOLDER_ACCOUNT};
