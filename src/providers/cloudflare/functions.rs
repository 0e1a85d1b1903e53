// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{header, Client, Response, StatusCode};
use serde_json::json;
use tracing::debug;

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::types::{DnsRecord, RecordType, Zone};

// Current module imports
use super::constants::RECORD_PAGE_SIZE;
use super::types::{
    ApiMessage, CfRecord, Cloudflare, CreateResponse, DeleteResponse, RecordListResponse,
    ZoneListResponse,
};

/// Creates a reqwest client carrying the bearer token as a sensitive
/// default header.
pub(super) fn create_reqwest_client(api_token: &str) -> Result<Client, ProviderError> {
    let mut headers: HeaderMap = HeaderMap::new();

    let bearer_token: String = format!("Bearer {}", api_token);
    let mut auth_value: HeaderValue = HeaderValue::from_str(&bearer_token)?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(ProviderError::HttpClientBuild)
}

/// Fetches the zones whose name matches `name` exactly.
pub(super) async fn fetch_zones(
    cloudflare: &Cloudflare,
    name: &str,
) -> Result<Vec<Zone>, ProviderError> {
    let endpoint = format!("{}/zones", cloudflare.base_url);

    let response = cloudflare
        .client
        .get(&endpoint)
        .query(&[("match", "all"), ("name", name)])
        .send()
        .await
        .map_err(|e| transport(&endpoint, e))?;

    let body = read_success_body(&endpoint, response).await?;
    let envelope: ZoneListResponse = decode(&endpoint, &body)?;
    if !envelope.success {
        return Err(api_failure(&endpoint, &envelope.errors));
    }

    debug!(name = %name, zones = envelope.result.len(), "Zone lookup complete");
    Ok(envelope.result)
}

/// Fetches the A and AAAA records of a zone, with a page-size hint.
pub(super) async fn fetch_dns_records(
    cloudflare: &Cloudflare,
    zone_id: &str,
) -> Result<Vec<DnsRecord>, ProviderError> {
    let endpoint = format!("{}/zones/{}/dns_records", cloudflare.base_url, zone_id);

    let response = cloudflare
        .client
        .get(&endpoint)
        .query(&[("per_page", RECORD_PAGE_SIZE)])
        .send()
        .await
        .map_err(|e| transport(&endpoint, e))?;

    let body = read_success_body(&endpoint, response).await?;
    let envelope: RecordListResponse = decode(&endpoint, &body)?;
    if !envelope.success {
        return Err(api_failure(&endpoint, &envelope.errors));
    }

    Ok(envelope
        .result
        .into_iter()
        .filter_map(CfRecord::into_record)
        .collect())
}

/// Creates one DNS record and returns the provider's copy.
#[allow(clippy::too_many_arguments)]
pub(super) async fn create_dns_record(
    cloudflare: &Cloudflare,
    zone_id: &str,
    record_type: RecordType,
    name: &str,
    content: &str,
    ttl: u32,
    proxied: bool,
) -> Result<DnsRecord, ProviderError> {
    let endpoint = format!("{}/zones/{}/dns_records", cloudflare.base_url, zone_id);

    let response = cloudflare
        .client
        .post(&endpoint)
        .json(&json!({
            "type": record_type.as_str(),
            "name": name,
            "content": content,
            "ttl": ttl,
            "proxied": proxied,
        }))
        .send()
        .await
        .map_err(|e| transport(&endpoint, e))?;

    let body = read_success_body(&endpoint, response).await?;
    let envelope: CreateResponse = decode(&endpoint, &body)?;
    if !envelope.success {
        return Err(api_failure(&endpoint, &envelope.errors));
    }

    envelope
        .result
        .and_then(CfRecord::into_record)
        .ok_or_else(|| ProviderError::MalformedResponse {
            endpoint: endpoint.clone(),
            message: "create response carried no record".to_string(),
        })
}

/// Deletes one DNS record by id.
pub(super) async fn delete_dns_record(
    cloudflare: &Cloudflare,
    zone_id: &str,
    record_id: &str,
) -> Result<(), ProviderError> {
    let endpoint = format!(
        "{}/zones/{}/dns_records/{}",
        cloudflare.base_url, zone_id, record_id
    );

    let response = cloudflare
        .client
        .delete(&endpoint)
        .send()
        .await
        .map_err(|e| transport(&endpoint, e))?;

    let body = read_success_body(&endpoint, response).await?;
    let envelope: DeleteResponse = decode(&endpoint, &body)?;
    if !envelope.success && envelope.result.is_none() {
        return Err(api_failure(&endpoint, &envelope.errors));
    }
    if let Some(deleted) = envelope.result {
        debug!(id = %deleted.id, "Provider confirmed record deletion");
    }

    Ok(())
}

/// Rejects 401 and non-2xx responses, otherwise hands back the body text.
async fn read_success_body(
    endpoint: &str,
    response: Response,
) -> Result<String, ProviderError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ProviderError::InvalidApiToken);
    }

    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ProviderError::Api {
            endpoint: endpoint.to_string(),
            message: format!("HTTP {} - {}", status, error_body),
        });
    }

    response
        .text()
        .await
        .map_err(|e| transport(endpoint, e))
}

fn decode<'a, T: serde::Deserialize<'a>>(
    endpoint: &str,
    body: &'a str,
) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::MalformedResponse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

fn transport(endpoint: &str, error: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

fn api_failure(endpoint: &str, errors: &[ApiMessage]) -> ProviderError {
    let message = if errors.is_empty() {
        "provider reported failure without detail".to_string()
    } else {
        errors
            .iter()
            .map(|e| format!("{} (code {})", e.message, e.code))
            .collect::<Vec<String>>()
            .join("; ")
    };
    ProviderError::Api {
        endpoint: endpoint.to_string(),
        message,
    }
}
