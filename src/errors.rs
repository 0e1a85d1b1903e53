// 3rd party crates
use thiserror::Error;

// Project imports
use crate::discovery::errors::DiscoveryError;
use crate::providers::errors::ProviderError;

/// Fatal conditions that abort a reconciliation pass.
///
/// Per-record create and delete failures are not here: they are logged
/// and counted, and the pass still exits successfully.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("address discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("no zone found for domain '{0}'")]
    ZoneNotFound(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
