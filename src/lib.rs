//! ddns-sync publishes a host's locally discovered IP addresses as DNS
//! records at Cloudflare.
//!
//! One invocation performs one sequential reconciliation pass: enumerate
//! interfaces, filter to candidate addresses, resolve the zone, list the
//! prefix-scoped records, compute the delete/create delta and apply it.
//! The pass is stateless and idempotent; an external scheduler drives
//! periodic runs.

pub mod discovery;
pub mod errors;
pub mod functions;
pub mod providers;
pub mod reconcile;
pub mod settings;
