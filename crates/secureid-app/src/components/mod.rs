//! UI components for the SecureID window.

pub mod app;
pub mod chat_bot;
pub mod create_identity;
pub mod header;
pub mod view_identity;

pub use app::App;
