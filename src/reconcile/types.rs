// Project imports
use crate::providers::types::{DnsRecord, RecordType};

/// A record the plan wants created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
}

/// The computed delta between provider state and the candidate set.
///
/// Deletes keep the whole record so failures can be reported with the
/// record's name and content, not just its id. The plan is derived data,
/// discarded after one application.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub deletes: Vec<DnsRecord>,
    pub creates: Vec<RecordSpec>,
}

/// Outcome counters of one plan application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplySummary {
    pub deleted: usize,
    pub created: usize,
    pub failed: usize,
}

impl ReconcilePlan {
    /// True when provider state already matches the candidate set.
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.creates.is_empty()
    }
}
