//! Per-panel state and flows
//!
//! Each panel owns a plain state struct with `begin_*`/`finish_*`
//! transitions. The async flow between the two (ledger call plus fixed
//! delay) is a free function taking the injected ledger and scheduler, so
//! the UI layer only moves results from one to the other.

pub mod chat;
pub mod create;
pub mod shell;
pub mod viewer;

pub use chat::{compose_reply, ChatMessage, ChatSession, Sender};
pub use create::{submit_identity, CreateIdentityForm, FormStatus, CREATE_FAILED_MESSAGE};
pub use shell::{start_session, Session, ShellState, Tab};
pub use viewer::{
    add_credential, load_profile, verify_identity, IdentityViewer, Profile, VIEW_FAILED_MESSAGE,
};
