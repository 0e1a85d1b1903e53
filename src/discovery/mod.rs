//! Local address discovery.
//!
//! Enumerates the host's network interfaces, applies the configured
//! interface allow-list and address blacklist, and produces the set of
//! candidate addresses that should be published as DNS records.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;
