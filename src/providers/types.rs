// Standard library
use std::fmt;

// 3rd party crates
use serde::{Deserialize, Serialize};

// Project imports
use crate::discovery::types::IpFamily;

/// DNS record types this updater publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
}

/// A provider-side zone, the administrative container for a domain's
/// records.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A DNS record as held by the provider. Only transient read copies are
/// kept; the provider owns the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub record_type: RecordType,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl RecordType {
    /// Record type that publishes an address of the given family.
    pub fn for_family(family: IpFamily) -> Self {
        match family {
            IpFamily::V4 => RecordType::A,
            IpFamily::V6 => RecordType::AAAA,
        }
    }

    /// Family of address this record type carries.
    pub fn family(&self) -> IpFamily {
        match self {
            RecordType::A => IpFamily::V4,
            RecordType::AAAA => IpFamily::V6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
