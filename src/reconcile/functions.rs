// 3rd party crates
use tracing::{debug, error, info};

// Project imports
use crate::discovery::types::{CandidateSet, IpFamily};
use crate::providers::traits::DnsProvider;
use crate::providers::types::{DnsRecord, RecordType};

// Current module imports
use super::types::{ApplySummary, ReconcilePlan, RecordSpec};

/// Derives the record name addresses of a family are published under.
pub fn record_name(prefix: &str, domain: &str, family: IpFamily) -> String {
    match family {
        IpFamily::V4 => format!("{}-v4.{}", prefix, domain),
        IpFamily::V6 => format!("{}-v6.{}", prefix, domain),
    }
}

/// Computes the delete/create delta between the provider's prefix-scoped
/// records and the candidate set.
///
/// A record whose content matches a candidate of the same family is kept
/// and consumes that candidate; a record whose content matches nothing is
/// marked for deletion. Candidates left over afterwards become creates,
/// every one of a family under the same derived name. Records whose name
/// does not start with the prefix are out of scope and never touched.
pub fn plan(
    mut candidates: CandidateSet,
    existing: &[DnsRecord],
    prefix: &str,
    domain: &str,
) -> ReconcilePlan {
    let mut deletes: Vec<DnsRecord> = Vec::new();

    for record in existing {
        if !record.name.starts_with(prefix) {
            continue;
        }

        if candidates.take(record.record_type.family(), &record.content) {
            debug!(
                name = %record.name,
                content = %record.content,
                "Record matches a candidate, keeping"
            );
        } else {
            deletes.push(record.clone());
        }
    }

    let mut creates: Vec<RecordSpec> = Vec::new();
    for content in candidates.ipv4 {
        creates.push(RecordSpec {
            record_type: RecordType::A,
            name: record_name(prefix, domain, IpFamily::V4),
            content,
        });
    }
    for content in candidates.ipv6 {
        creates.push(RecordSpec {
            record_type: RecordType::AAAA,
            name: record_name(prefix, domain, IpFamily::V6),
            content,
        });
    }

    ReconcilePlan { deletes, creates }
}

/// Applies a plan through the provider, deletes before creates.
///
/// Every call is evaluated on its own: a provider failure is logged with
/// the record's identity and counted, and the remaining entries still run.
pub async fn apply(
    plan: &ReconcilePlan,
    provider: &dyn DnsProvider,
    zone_id: &str,
    ttl: u32,
) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for record in &plan.deletes {
        match provider.delete_record(zone_id, &record.id).await {
            Ok(()) => {
                info!(
                    id = %record.id,
                    name = %record.name,
                    content = %record.content,
                    "Deleted stale record"
                );
                summary.deleted += 1;
            }
            Err(e) => {
                error!(
                    id = %record.id,
                    name = %record.name,
                    content = %record.content,
                    "Failed to delete record: {}",
                    e
                );
                summary.failed += 1;
            }
        }
    }

    for spec in &plan.creates {
        match provider
            .create_record(
                zone_id,
                spec.record_type,
                &spec.name,
                &spec.content,
                ttl,
                false,
            )
            .await
        {
            Ok(record) => {
                info!(
                    id = %record.id,
                    name = %record.name,
                    content = %record.content,
                    "Created record"
                );
                summary.created += 1;
            }
            Err(e) => {
                error!(
                    name = %spec.name,
                    content = %spec.content,
                    "Failed to create record: {}",
                    e
                );
                summary.failed += 1;
            }
        }
    }

    summary
}
