// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

/// Errors raised while loading or validating configuration. All of these
/// are fatal before any network call is made.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required setting '{name}' (flag --{flag}, config key '{name}', or environment)")]
    Missing { name: &'static str, flag: &'static str },

    #[error("invalid log level '{0}': must be one of error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("ttl must be 1 (provider-automatic) or between 60 and 86400 seconds, got {0}")]
    InvalidTtl(u32),

    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to create default configuration at {path}: {source}")]
    WriteDefault {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
