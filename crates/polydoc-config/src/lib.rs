//! # polydoc-config
//!
//! Layered configuration loading for polydoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`POLYDOC_*` prefix, `__` as separator)
//! 2. Project-level `.polydoc/config.toml`
//! 3. User-level `~/.config/polydoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `POLYDOC_ANALYZER__PROGRAM` -> `analyzer.program`,
//! `POLYDOC_EXTRACT__BEHAVIOR_NAMESPACE` -> `extract.behavior_namespace`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use polydoc_config::PolydocConfig;
//!
//! let config = PolydocConfig::load_with_dotenv().expect("config");
//!
//! if config.analyzer.is_configured() {
//!     println!("Analyzer: {}", config.analyzer.program);
//! }
//! ```

mod analyzer;
mod error;
mod extract;
mod output;

pub use analyzer::AnalyzerConfig;
pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolydocConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl PolydocConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".polydoc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("POLYDOC_").split("__"))
    }

    /// Reject values no run could succeed with. The analyzer section is
    /// checked by [`Self::require_analyzer`] instead, since snapshot runs
    /// never read it.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extract.behavior_namespace.ends_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "extract.behavior_namespace".to_string(),
                reason: "give the namespace without its trailing '.'".to_string(),
            });
        }
        Ok(())
    }

    /// The analyzer section, once it names a program and a usable timeout.
    ///
    /// # Errors
    /// Returns `ConfigError::NotConfigured` if `analyzer.program` is empty,
    /// or `ConfigError::InvalidValue` if `analyzer.timeout_secs` is zero.
    pub fn require_analyzer(&self) -> Result<&AnalyzerConfig, ConfigError> {
        if !self.analyzer.is_configured() {
            return Err(ConfigError::NotConfigured {
                field: "analyzer.program".to_string(),
            });
        }
        if self.analyzer.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analyzer.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(&self.analyzer)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("polydoc").join("config.toml"))
    }
}
