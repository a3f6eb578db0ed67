//! SecureID desktop app library.
//!
//! Exposes the components and service wiring so the window can be embedded
//! or launched from `main.rs`.

pub mod components;
pub mod file_utils;
pub mod services;

/// App stylesheet, injected into the webview head.
pub const APP_CSS: &str = include_str!("../assets/styles.css");
