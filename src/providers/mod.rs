pub mod cloudflare;
pub mod errors;
pub mod traits;
pub mod types;

pub use errors::ProviderError;
pub use traits::DnsProvider;
