// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ProviderError;
use super::types::{DnsRecord, RecordType, Zone};

/// Semantic operations the reconciler needs from a DNS provider.
///
/// The reconciler never sees the provider's wire format, only these four
/// calls. Implementations authenticate however their REST contract
/// requires; the Cloudflare implementation uses a bearer token.
///
/// Implementations must not retry: a failed call is reported once and the
/// caller decides whether it is fatal.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Lists zones whose name matches `name` exactly.
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError>;

    /// Lists the A and AAAA records of a zone. Records of other types are
    /// invisible to the reconciler and therefore never touched.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>, ProviderError>;

    /// Creates a record and returns the provider's copy of it.
    async fn create_record(
        &self,
        zone_id: &str,
        record_type: RecordType,
        name: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> Result<DnsRecord, ProviderError>;

    /// Deletes a record by its provider-assigned id.
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), ProviderError>;
}
