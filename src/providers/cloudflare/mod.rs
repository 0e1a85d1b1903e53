//! Cloudflare implementation of the [`DnsProvider`](super::DnsProvider)
//! contract, speaking the v4 REST API with bearer-token authentication.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use types::Cloudflare;
