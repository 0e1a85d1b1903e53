// 3rd party crates
use thiserror::Error;

/// Errors surfaced by a DNS provider client.
///
/// `apply` treats these as per-record failures for create and delete
/// calls; zone resolution and record listing treat them as fatal.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API token was rejected by the provider")]
    InvalidApiToken,

    #[error("invalid API token format: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(reqwest::Error),

    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("provider rejected {endpoint}: {message}")]
    Api { endpoint: String, message: String },

    #[error("malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },
}
