// Standard library
use std::net::IpAddr;

// 3rd party crates
use regex::Regex;
use serde::Deserialize;

/// Address family of a discovered address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

/// A network interface and the ordered addresses bound to it.
#[derive(Debug, Clone)]
pub struct InterfaceObservation {
    pub name: String,
    pub addresses: Vec<IpAddr>,
}

/// Deduplicated candidate addresses that passed filtering, split by family.
///
/// Entries keep the order in which they were first observed so a run over
/// the same host state always produces the same sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// Compiled interface allow-list and address blacklist.
///
/// Allow-list entries match anywhere in the interface name, so `wan`
/// accepts `wan0`. Blacklist entries are anchored at the start of the
/// textual address.
#[derive(Debug)]
pub struct DiscoveryFilter {
    pub(super) allow: Vec<Regex>,
    pub(super) deny: Vec<Regex>,
}

/// Source of interface observations, backed by the `ip` utility.
#[derive(Debug, Default)]
pub struct IpCommandSource;

/// One link in the JSON output of `ip -json addr show`.
#[derive(Debug, Deserialize)]
pub(super) struct IpCommandLink {
    pub ifname: String,
    #[serde(default)]
    pub addr_info: Vec<IpCommandAddrInfo>,
}

/// One address entry under a link.
#[derive(Debug, Deserialize)]
pub(super) struct IpCommandAddrInfo {
    pub local: Option<String>,
}
