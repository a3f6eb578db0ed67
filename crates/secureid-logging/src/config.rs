//! Logging options for a SecureID launch
//!
//! The console always gets human-readable output. JSONL goes to files,
//! and only when a log directory is configured.

use std::path::PathBuf;

/// What to install as the global subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Colored console output
    pub ansi: bool,
    /// JSONL file output
    pub file: Option<FileConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: false,
            file: None,
        }
    }
}

impl LogConfig {
    /// Debug level with colored console output
    pub fn development() -> Self {
        Self {
            filter: "debug".to_string(),
            ansi: true,
            file: None,
        }
    }

    /// Config for the desktop binary: `--dev` picks the preset, and a
    /// log directory adds daily JSONL files on top of either one.
    pub fn for_launch(dev: bool, log_dir: Option<PathBuf>) -> Self {
        let config = if dev {
            Self::development()
        } else {
            Self::default()
        };
        match log_dir {
            Some(dir) => config.with_log_dir(dir),
            None => config,
        }
    }

    pub fn with_log_dir(mut self, directory: PathBuf) -> Self {
        self.file = Some(FileConfig::new(directory));
        self
    }
}

/// Daily-rotated JSONL files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub directory: PathBuf,
    /// File name prefix; files are named `{prefix}.{date}.log`
    pub prefix: String,
    /// Rotated files to retain
    pub max_files: usize,
}

impl FileConfig {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            prefix: "secureid".to_string(),
            max_files: 14,
        }
    }
}
