// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::providers::types::{DnsRecord, RecordType, Zone};

/// Client for the Cloudflare v4 API.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub(super) client: Client,
    pub(super) base_url: String,
}

/// Envelope of a zone listing response.
#[derive(Debug, Deserialize)]
pub(super) struct ZoneListResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Vec<Zone>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Envelope of a DNS record listing response.
#[derive(Debug, Deserialize)]
pub(super) struct RecordListResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Vec<CfRecord>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Envelope of a record creation response.
#[derive(Debug, Deserialize)]
pub(super) struct CreateResponse {
    pub success: bool,
    pub result: Option<CfRecord>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Envelope of a record deletion response. Cloudflare echoes only the id
/// of the removed record.
#[derive(Debug, Deserialize)]
pub(super) struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    pub result: Option<DeletedRecord>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeletedRecord {
    pub id: String,
}

/// A DNS record as Cloudflare serializes it. The record type stays a
/// plain string here so listings containing TXT, MX and friends still
/// deserialize; conversion drops everything that is not A or AAAA.
#[derive(Debug, Deserialize)]
pub(super) struct CfRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

/// One error entry in a Cloudflare response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl CfRecord {
    /// Converts the wire record into the provider-neutral model, or `None`
    /// for record types the reconciler does not manage.
    pub(super) fn into_record(self) -> Option<DnsRecord> {
        let record_type = match self.record_type.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            _ => return None,
        };
        Some(DnsRecord {
            id: self.id,
            name: self.name,
            record_type,
            content: self.content,
            ttl: self.ttl,
            proxied: self.proxied,
        })
    }
}
