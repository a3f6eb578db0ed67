//! Entry point for the SecureID desktop app.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

use secureid_app::components::App;
use secureid_app::services::set_launch;
use secureid_app::APP_CSS;
use secureid_core::{AppConfig, LaunchOverrides};
use secureid_logging::{LogConfig, SecureIdSubscriberBuilder, SessionContextGuard};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "secureid")]
#[command(about = "Decentralized identity demo over a mocked ledger")]
struct Args {
    /// JSON configuration file (falls back to SECUREID_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Account reported by the wallet provider
    #[arg(short, long)]
    account: Option<String>,

    /// Where the identity viewer gets its profile: "demo" or "ledger"
    #[arg(long)]
    profile_source: Option<String>,

    /// Write JSONL logs into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Debug-level colored console logging
    #[arg(long)]
    dev: bool,
}

impl Args {
    fn overrides(&self) -> LaunchOverrides {
        LaunchOverrides {
            config: self.config.clone(),
            account: self.account.clone(),
            profile_source: self.profile_source.clone(),
            log_dir: self.log_dir.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("secureid: {}", e);
            std::process::exit(2);
        }
    };

    let log_config = LogConfig::for_launch(args.dev, config.log_dir.clone());

    // Keep the guard alive so buffered file logs flush on exit
    let _log_guard = match SecureIdSubscriberBuilder::new().with_config(log_config).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("secureid: logging disabled: {}", e);
            None
        }
    };

    let _session = SessionContextGuard::new("desktop");
    let session_span = SessionContextGuard::span();
    let _entered = session_span.enter();

    tracing::info!(
        profile_source = ?config.profile_source,
        wallet_accounts = config.wallet_accounts.len(),
        log_dir = ?config.log_dir,
        "Starting SecureID"
    );

    let window = config.window;
    let mut wb = WindowBuilder::new()
        .with_title("SecureID")
        .with_maximized(false)
        .with_inner_size(LogicalSize::new(window.width, window.height));

    if let (Some(x), Some(y)) = (window.x, window.y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    // Parent span for tasks spawned by the components
    set_launch(config, session_span.clone());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .launch(App);
}
