// 3rd party crates
use thiserror::Error;

/// Errors raised while discovering candidate addresses.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to parse '{command}' output: {source}")]
    CommandOutput {
        command: String,
        source: serde_json::Error,
    },
}
