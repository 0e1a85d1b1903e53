//! Behavior of plan application against a scripted provider: deletions
//! run before creations, one failed call never aborts the batch, a zone
//! lookup miss is fatal, and a completed pass is idempotent.

// Standard library
use std::sync::Mutex;

// 3rd party crates
use async_trait::async_trait;

// Project imports
use ddns_sync::discovery::types::CandidateSet;
use ddns_sync::errors::RunError;
use ddns_sync::functions::find_zone;
use ddns_sync::providers::errors::ProviderError;
use ddns_sync::providers::traits::DnsProvider;
use ddns_sync::providers::types::{DnsRecord, RecordType, Zone};
use ddns_sync::reconcile::functions::{apply, plan};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    ListZones(String),
    ListRecords(String),
    Delete(String),
    Create(String, String),
}

/// In-memory provider that records every call and mutates its own record
/// store, so a second pass sees the outcome of the first.
#[derive(Default)]
struct ScriptedProvider {
    zones: Vec<Zone>,
    records: Mutex<Vec<DnsRecord>>,
    fail_delete_ids: Vec<String>,
    fail_create_contents: Vec<String>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedProvider {
    fn with_zone(mut self, id: &str, name: &str) -> Self {
        self.zones.push(Zone {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    fn with_record(self, id: &str, name: &str, record_type: RecordType, content: &str) -> Self {
        self.records.lock().unwrap().push(DnsRecord {
            id: id.to_string(),
            name: name.to_string(),
            record_type,
            content: content.to_string(),
            ttl: 120,
            proxied: false,
        });
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DnsProvider for ScriptedProvider {
    async fn list_zones(&self, name: &str) -> Result<Vec<Zone>, ProviderError> {
        self.log(Call::ListZones(name.to_string()));
        Ok(self
            .zones
            .iter()
            .filter(|z| z.name == name)
            .cloned()
            .collect())
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>, ProviderError> {
        self.log(Call::ListRecords(zone_id.to_string()));
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create_record(
        &self,
        _zone_id: &str,
        record_type: RecordType,
        name: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> Result<DnsRecord, ProviderError> {
        self.log(Call::Create(name.to_string(), content.to_string()));
        if self.fail_create_contents.iter().any(|c| c == content) {
            return Err(ProviderError::Api {
                endpoint: "create".to_string(),
                message: "scripted failure".to_string(),
            });
        }
        let record = DnsRecord {
            id: format!("created-{}", content),
            name: name.to_string(),
            record_type,
            content: content.to_string(),
            ttl,
            proxied,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn delete_record(&self, _zone_id: &str, record_id: &str) -> Result<(), ProviderError> {
        self.log(Call::Delete(record_id.to_string()));
        if self.fail_delete_ids.iter().any(|id| id == record_id) {
            return Err(ProviderError::Api {
                endpoint: "delete".to_string(),
                message: "scripted failure".to_string(),
            });
        }
        self.records.lock().unwrap().retain(|r| r.id != record_id);
        Ok(())
    }
}

fn candidates(ipv4: &[&str], ipv6: &[&str]) -> CandidateSet {
    CandidateSet {
        ipv4: ipv4.iter().map(|c| c.to_string()).collect(),
        ipv6: ipv6.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::test]
async fn deletions_are_issued_before_creations() {
    let provider = ScriptedProvider::default()
        .with_record("stale-1", "ddns-v4.example.com", RecordType::A, "9.9.9.9")
        .with_record("stale-2", "ddns-v6.example.com", RecordType::AAAA, "2001:db8::9");

    let existing = provider.records.lock().unwrap().clone();
    let plan = plan(
        candidates(&["1.2.3.4"], &["2001:db8::1"]),
        &existing,
        "ddns",
        "example.com",
    );
    let summary = apply(&plan, &provider, "zone-1", 120).await;

    assert_eq!(summary.deleted, 2);
    assert_eq!(summary.created, 2);
    assert_eq!(summary.failed, 0);

    let calls = provider.calls();
    let first_create = calls
        .iter()
        .position(|c| matches!(c, Call::Create(_, _)))
        .unwrap();
    let last_delete = calls
        .iter()
        .rposition(|c| matches!(c, Call::Delete(_)))
        .unwrap();
    assert!(last_delete < first_create);
}

#[tokio::test]
async fn one_failed_call_does_not_abort_the_batch() {
    let provider = ScriptedProvider {
        fail_delete_ids: vec!["stale-1".to_string()],
        fail_create_contents: vec!["1.2.3.4".to_string()],
        ..Default::default()
    }
    .with_record("stale-1", "ddns-v4.example.com", RecordType::A, "9.9.9.9")
    .with_record("stale-2", "ddns-v4.example.com", RecordType::A, "8.8.8.8");

    let existing = provider.records.lock().unwrap().clone();
    let plan = plan(
        candidates(&["1.2.3.4", "5.6.7.8"], &[]),
        &existing,
        "ddns",
        "example.com",
    );
    let summary = apply(&plan, &provider, "zone-1", 120).await;

    // Both deletes and both creates were attempted despite the failures.
    assert_eq!(provider.calls().len(), 4);
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.created, 1);
    assert_eq!(summary.failed, 2);
}

#[tokio::test]
async fn zone_lookup_miss_is_fatal_and_issues_nothing_else() {
    let provider = ScriptedProvider::default().with_zone("zone-1", "other.net");

    let err = find_zone(&provider, "example.com").await.unwrap_err();
    assert!(matches!(err, RunError::ZoneNotFound(domain) if domain == "example.com"));

    // Only the zone listing went out.
    assert_eq!(
        provider.calls(),
        vec![Call::ListZones("example.com".to_string())]
    );
}

#[tokio::test]
async fn second_pass_over_applied_state_plans_nothing() {
    let provider = ScriptedProvider::default()
        .with_zone("zone-1", "example.com")
        .with_record("stale-1", "ddns-v4.example.com", RecordType::A, "9.9.9.9");
    let wanted = candidates(&["1.2.3.4"], &["2001:db8::1", "2001:db8::2"]);

    let existing = provider.list_records("zone-1").await.unwrap();
    let first = plan(wanted.clone(), &existing, "ddns", "example.com");
    assert!(!first.is_empty());
    let summary = apply(&first, &provider, "zone-1", 120).await;
    assert_eq!(summary.failed, 0);

    let after = provider.list_records("zone-1").await.unwrap();
    let second = plan(wanted, &after, "ddns", "example.com");
    assert!(second.is_empty());
}
