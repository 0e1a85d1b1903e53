// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;
use tracing::debug;

// Current module imports
use super::constants::{IP_COMMAND, IP_COMMAND_ARGS};
use super::errors::DiscoveryError;
use super::functions::parse_address_listing;
use super::traits::InterfaceSource;
use super::types::{CandidateSet, DiscoveryFilter, InterfaceObservation, IpCommandSource, IpFamily};

impl IpFamily {
    /// Family of a parsed address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Human-readable family label used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            IpFamily::V4 => "IPv4",
            IpFamily::V6 => "IPv6",
        }
    }
}

impl CandidateSet {
    /// True when neither partition holds a candidate.
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    /// Total number of candidates across both partitions.
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    /// Appends a candidate to its family partition unless an equal textual
    /// form is already present.
    pub fn insert(&mut self, family: IpFamily, content: String) {
        let partition = self.partition_mut(family);
        if !partition.iter().any(|c| c == &content) {
            partition.push(content);
        }
    }

    /// Removes a candidate by exact textual equality within the given
    /// family. Returns whether the value was present.
    pub fn take(&mut self, family: IpFamily, content: &str) -> bool {
        let partition = self.partition_mut(family);
        match partition.iter().position(|c| c == content) {
            Some(idx) => {
                partition.remove(idx);
                true
            }
            None => false,
        }
    }

    fn partition_mut(&mut self, family: IpFamily) -> &mut Vec<String> {
        match family {
            IpFamily::V4 => &mut self.ipv4,
            IpFamily::V6 => &mut self.ipv6,
        }
    }
}

impl DiscoveryFilter {
    /// Compiles allow-list and blacklist patterns.
    ///
    /// Blacklist patterns are anchored at the start of the address text;
    /// allow-list patterns match anywhere in the interface name.
    pub fn new(allow_list: &[String], blacklist: &[String]) -> Result<Self, DiscoveryError> {
        let allow = allow_list
            .iter()
            .map(|pattern| compile(pattern, false))
            .collect::<Result<Vec<Regex>, DiscoveryError>>()?;
        let deny = blacklist
            .iter()
            .map(|pattern| compile(pattern, true))
            .collect::<Result<Vec<Regex>, DiscoveryError>>()?;
        Ok(Self { allow, deny })
    }

    /// Whether addresses on the named interface are considered at all.
    /// An empty allow-list accepts every interface.
    pub fn accepts_interface(&self, name: &str) -> bool {
        self.allow.is_empty() || self.allow.iter().any(|re| re.is_match(name))
    }

    /// Whether the textual address survives the blacklist.
    pub fn permits_address(&self, content: &str) -> bool {
        !self.deny.iter().any(|re| re.is_match(content))
    }
}

fn compile(pattern: &str, anchored: bool) -> Result<Regex, DiscoveryError> {
    let expression = if anchored {
        format!("^(?:{})", pattern)
    } else {
        pattern.to_string()
    };
    Regex::new(&expression).map_err(|source| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl IpCommandSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterfaceSource for IpCommandSource {
    async fn list_interfaces(&self) -> Result<Vec<InterfaceObservation>, DiscoveryError> {
        let output = Command::new(IP_COMMAND)
            .args(IP_COMMAND_ARGS)
            .output()
            .await
            .map_err(|source| DiscoveryError::CommandSpawn {
                command: IP_COMMAND.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(DiscoveryError::CommandFailed {
                command: IP_COMMAND.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let observations = parse_address_listing(&listing)?;
        debug!(
            interfaces = observations.len(),
            "Enumerated network interfaces"
        );
        Ok(observations)
    }
}
