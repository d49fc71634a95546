use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{MatchError, MatchResult};
use crate::search::hash::{HashParams, DEFAULT_BASE, DEFAULT_MODULUS};

/// Settings shared by the library and the command-line front end.
///
/// # Configuration Locations
///
/// Files are layered in order of increasing precedence:
/// 1. Global `$CONFIG_DIR/matchscope/config.yaml`
/// 2. Local `.matchscope.yaml` in the current directory
/// 3. A file passed explicitly (the CLI's `--config` flag)
///
/// Command-line flags override all of them, see [`MatchConfig::merge_with_cli`].
///
/// # Configuration Format
///
/// ```yaml
/// # Radix of the Rabin-Karp rolling hash
/// base: 256
///
/// # Modulus of the rolling hash; small values produce more spurious hits
/// modulus: 101
///
/// # Threads used by batch comparisons (default: CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Radix of the rolling hash
    #[serde(default = "default_base")]
    pub base: u32,

    /// Modulus of the rolling hash, must be at least 1
    #[serde(default = "default_modulus")]
    pub modulus: u32,

    /// Number of threads to use for batch comparisons
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Values given on the command line; `None` keeps the file value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base: Option<u32>,
    pub modulus: Option<u32>,
    pub thread_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
}

fn default_base() -> u32 {
    DEFAULT_BASE
}

fn default_modulus() -> u32 {
    DEFAULT_MODULUS
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            modulus: default_modulus(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> MatchResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, layering `config_path` over the default locations
    pub fn load_from(config_path: Option<&Path>) -> MatchResult<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(MatchError::file_not_found(path));
            }
        }

        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("matchscope/config.yaml")),
            Some(PathBuf::from(".matchscope.yaml")),
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Applies command-line values on top of the loaded configuration
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(base) = cli.base {
            self.base = base;
        }
        if let Some(modulus) = cli.modulus {
            self.modulus = modulus;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// Renders the configuration in the same format it is loaded from
    pub fn to_yaml(&self) -> MatchResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The validated rolling-hash parameters
    pub fn hash_params(&self) -> MatchResult<HashParams> {
        HashParams::new(self.base, self.modulus).validate()
    }
}
