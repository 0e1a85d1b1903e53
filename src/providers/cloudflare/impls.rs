// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::DnsProvider;
use crate::providers::types::{DnsRecord, RecordType, Zone};

// Current module imports
use super::constants::CLOUDFLARE_API_BASE;
use super::functions::{
    create_dns_record, create_reqwest_client, delete_dns_record, fetch_dns_records, fetch_zones,
};
use super::types::Cloudflare;

impl Cloudflare {
    /// Builds a client against the production API.
    pub fn new(api_token: &str) -> Result<Self, ProviderError> {
        Self::with_base_url(api_token, CLOUDFLARE_API_BASE)
    }

    /// Builds a client against an explicit base URL. Tests point this at a
    /// local mock server.
    pub fn with_base_url(api_token: &str, base_url: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client: create_reqwest_client(api_token)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DnsProvider for Cloudflare {
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError> {
        fetch_zones(self, name).await
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>, ProviderError> {
        fetch_dns_records(self, zone_id).await
    }

    async fn create_record(
        &self,
        zone_id: &str,
        record_type: RecordType,
        name: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> Result<DnsRecord, ProviderError> {
        create_dns_record(self, zone_id, record_type, name, content, ttl, proxied).await
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), ProviderError> {
        delete_dns_record(self, zone_id, record_id).await
    }
}
