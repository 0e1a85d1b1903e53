// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::DiscoveryError;
use super::types::InterfaceObservation;

/// Source of the host's network interfaces and their bound addresses.
///
/// The production implementation shells out to the system's network
/// configuration utility; tests substitute canned observations.
#[async_trait]
pub trait InterfaceSource: Send + Sync {
    /// Lists every interface on the host together with its addresses.
    async fn list_interfaces(&self) -> Result<Vec<InterfaceObservation>, DiscoveryError>;
}
