//! Application configuration
//!
//! Precedence, lowest first: defaults, JSON file, `SECUREID_*` environment
//! variables, command-line overrides. Blank values at any layer count as
//! unset.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::wallet::PLACEHOLDER_ACCOUNT;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed delays used by the panel flows
    pub timings: Timings,
    /// Account shown when no wallet answers
    pub placeholder_account: String,
    /// Accounts offered by the static wallet; empty means no wallet
    pub wallet_accounts: Vec<String>,
    /// Where the view panel gets its identity from
    pub profile_source: ProfileSource,
    /// Window geometry
    pub window: WindowConfig,
    /// Directory for JSONL log files (console only when unset)
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            placeholder_account: PLACEHOLDER_ACCOUNT.to_string(),
            wallet_accounts: Vec::new(),
            profile_source: ProfileSource::default(),
            window: WindowConfig::default(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Parse a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Build the launch configuration from every layer, reading the
    /// process environment.
    pub fn load(overrides: &LaunchOverrides) -> Result<Self, ConfigError> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    /// Build the launch configuration with an arbitrary variable lookup.
    ///
    /// The file comes from `overrides.config`, else `SECUREID_CONFIG`.
    pub fn load_with(
        overrides: &LaunchOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = overrides
            .config
            .clone()
            .or_else(|| non_blank(lookup("SECUREID_CONFIG")).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        config.apply_vars(lookup)?;
        overrides.apply(&mut config)?;
        Ok(config)
    }

    /// Apply `SECUREID_*` overrides from an arbitrary lookup.
    pub fn apply_vars(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let var = |key: &str| non_blank(lookup(key));

        if let Some(account) = var("SECUREID_ACCOUNT") {
            self.wallet_accounts = vec![account];
        }
        if let Some(source) = var("SECUREID_PROFILE_SOURCE") {
            self.profile_source = source.parse()?;
        }
        if let Some(dir) = var("SECUREID_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(v) = var("SECUREID_WIN_W") {
            self.window.width = parse_f64("SECUREID_WIN_W", &v)?;
        }
        if let Some(v) = var("SECUREID_WIN_H") {
            self.window.height = parse_f64("SECUREID_WIN_H", &v)?;
        }
        if let Some(v) = var("SECUREID_WIN_X") {
            self.window.x = Some(parse_f64("SECUREID_WIN_X", &v)?);
        }
        if let Some(v) = var("SECUREID_WIN_Y") {
            self.window.y = Some(parse_f64("SECUREID_WIN_Y", &v)?);
        }
        Ok(())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOverrides {
    pub config: Option<PathBuf>,
    pub account: Option<String>,
    pub profile_source: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl LaunchOverrides {
    fn apply(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Some(account) = non_blank(self.account.clone()) {
            config.wallet_accounts = vec![account];
        }
        if let Some(source) = non_blank(self.profile_source.clone()) {
            config.profile_source = source.parse()?;
        }
        if let Some(dir) = self.log_dir.clone().filter(|d| !d.as_os_str().is_empty()) {
            config.log_dir = Some(dir);
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Fixed delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub identity_confirmation_ms: u64,
    pub profile_load_ms: u64,
    pub credential_confirmation_ms: u64,
    pub verification_confirmation_ms: u64,
    pub bot_reply_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            identity_confirmation_ms: 1500,
            profile_load_ms: 1000,
            credential_confirmation_ms: 1000,
            verification_confirmation_ms: 1000,
            bot_reply_ms: 1000,
        }
    }
}

impl Timings {
    pub fn identity_confirmation(&self) -> Duration {
        Duration::from_millis(self.identity_confirmation_ms)
    }

    pub fn profile_load(&self) -> Duration {
        Duration::from_millis(self.profile_load_ms)
    }

    pub fn credential_confirmation(&self) -> Duration {
        Duration::from_millis(self.credential_confirmation_ms)
    }

    pub fn verification_confirmation(&self) -> Duration {
        Duration::from_millis(self.verification_confirmation_ms)
    }

    pub fn bot_reply(&self) -> Duration {
        Duration::from_millis(self.bot_reply_ms)
    }
}

/// Source of the identity shown by the view panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// Hardcoded demo identity and credentials
    #[default]
    Demo,
    /// `get_identity_info` from the ledger, no credentials
    Ledger,
}

impl FromStr for ProfileSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(ProfileSource::Demo),
            "ledger" => Ok(ProfileSource::Ledger),
            _ => Err(ConfigError::InvalidValue {
                key: "profile_source".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 760.0,
            x: None,
            y: None,
        }
    }
}
