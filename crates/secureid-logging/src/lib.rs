//! Console and JSONL file logging for SecureID
//!
//! # Quick Start
//!
//! ```ignore
//! use secureid_logging::{LogConfig, SecureIdSubscriberBuilder};
//!
//! let _guard = SecureIdSubscriberBuilder::new()
//!     .with_config(LogConfig::for_launch(true, Some("logs".into())))
//!     .init()?;
//! ```
//!
//! Keep the returned guard alive for as long as file output is needed;
//! dropping it flushes the background writer.

pub mod config;
pub mod context;
pub mod layers;

pub use config::{FileConfig, LogConfig};
pub use context::{SessionContextData, SessionContextGuard};
pub use layers::{jsonl_layer, SessionContextExtension, SessionContextLayer};

use std::fs;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to prepare log directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create rolling log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Builder for configuring and initializing the SecureID logging subscriber
#[derive(Debug, Default)]
pub struct SecureIdSubscriberBuilder {
    config: LogConfig,
}

impl SecureIdSubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the subscriber globally.
    ///
    /// Returns the file writer's guard when file output is configured.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.config.filter)
                .map_err(|_| LoggingError::InvalidFilter(self.config.filter.clone()))?,
        };

        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.config.ansi)
            .with_target(true);

        let registry = Registry::default()
            .with(env_filter)
            .with(SessionContextLayer::new())
            .with(console_layer);

        match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                registry.with(jsonl_layer(writer)).try_init()?;
                Ok(Some(guard))
            }
            None => {
                registry.try_init()?;
                Ok(None)
            }
        }
    }
}

fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&file_config.directory).map_err(|source| LoggingError::Io {
        path: file_config.directory.display().to_string(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_config.prefix.clone())
        .filename_suffix("log")
        .max_log_files(file_config.max_files)
        .build(&file_config.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}
