//! Errors raised while loading or reading polydoc settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `POLYDOC_*` variable failed to parse or merge.
    #[error("Failed to load polydoc settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting this run depends on is empty, e.g. `analyzer.program` when
    /// no snapshot was supplied.
    #[error("'{field}' is not set")]
    NotConfigured { field: String },

    /// A setting is present but unusable.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
