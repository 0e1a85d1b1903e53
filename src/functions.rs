// 3rd party crates
use tracing::{info, warn};

// Project imports
use crate::discovery::functions::discover;
use crate::discovery::traits::InterfaceSource;
use crate::discovery::types::{CandidateSet, DiscoveryFilter, IpCommandSource, IpFamily};
use crate::errors::RunError;
use crate::providers::cloudflare::Cloudflare;
use crate::providers::traits::DnsProvider;
use crate::providers::types::Zone;
use crate::reconcile::functions::{apply, plan};
use crate::reconcile::types::ApplySummary;
use crate::settings::types::Settings;

/// Performs one full reconciliation pass.
///
/// The pipeline is strictly sequential: enumerate interfaces, filter,
/// resolve the zone, list records, compute the plan, apply deletes then
/// creates. A fatal error aborts the pass; per-record failures only show
/// up in the summary.
pub async fn run(settings: &Settings) -> Result<ApplySummary, RunError> {
    info!(
        domain = %settings.domain,
        prefix = %settings.prefix,
        "Starting reconciliation pass"
    );

    let source = IpCommandSource::new();
    let observations = source.list_interfaces().await?;

    let filter = DiscoveryFilter::new(&settings.interfaces, &settings.blacklist)?;
    let candidates = discover(&observations, &filter);
    report_candidates(&candidates);

    let provider = Cloudflare::new(&settings.api_token)?;
    let zone = find_zone(&provider, &settings.domain).await?;
    info!(zone_id = %zone.id, domain = %settings.domain, "Resolved zone");

    let records = provider.list_records(&zone.id).await?;
    info!(records = records.len(), "Fetched existing records");

    let plan = plan(candidates, &records, &settings.prefix, &settings.domain);
    if plan.is_empty() {
        info!("Records already match discovered addresses, nothing to do");
        return Ok(ApplySummary::default());
    }

    info!(
        deletes = plan.deletes.len(),
        creates = plan.creates.len(),
        "Applying reconciliation plan"
    );
    let summary = apply(&plan, &provider, &zone.id, settings.ttl).await;
    info!(
        deleted = summary.deleted,
        created = summary.created,
        failed = summary.failed,
        "Reconciliation pass complete"
    );
    Ok(summary)
}

/// Resolves the configured domain to a provider zone. Zero matches is
/// fatal: there is no meaningful reconciliation without a zone.
pub async fn find_zone(
    provider: &dyn DnsProvider,
    domain: &str,
) -> Result<Zone, RunError> {
    let zones = provider.list_zones(domain).await?;
    zones
        .into_iter()
        .next()
        .ok_or_else(|| RunError::ZoneNotFound(domain.to_string()))
}

fn report_candidates(candidates: &CandidateSet) {
    for content in &candidates.ipv4 {
        info!(address = %content, family = IpFamily::V4.label(), "Candidate address");
    }
    for content in &candidates.ipv6 {
        info!(address = %content, family = IpFamily::V6.label(), "Candidate address");
    }
    if candidates.is_empty() {
        // Still a valid pass: stale records get deleted.
        warn!("No candidate addresses discovered");
    }
}
