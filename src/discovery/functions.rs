// Standard library
use std::net::IpAddr;

// 3rd party crates
use tracing::{debug, trace};

// Current module imports
use super::constants::IP_COMMAND;
use super::errors::DiscoveryError;
use super::types::{
    CandidateSet, DiscoveryFilter, InterfaceObservation, IpCommandLink, IpFamily,
};

/// Filters interface observations down to the candidate address set.
///
/// An address is kept when its owning interface passes the allow-list and
/// its textual form passes the blacklist. Candidates are deduplicated per
/// family and keep first-seen order.
pub fn discover(
    observations: &[InterfaceObservation],
    filter: &DiscoveryFilter,
) -> CandidateSet {
    let mut candidates = CandidateSet::default();

    for observation in observations {
        if !filter.accepts_interface(&observation.name) {
            trace!(
                interface = %observation.name,
                "Interface not in allow-list, skipping"
            );
            continue;
        }

        for address in &observation.addresses {
            let content = address.to_string();
            if !filter.permits_address(&content) {
                trace!(
                    interface = %observation.name,
                    address = %content,
                    "Address matches blacklist, skipping"
                );
                continue;
            }
            debug!(
                interface = %observation.name,
                address = %content,
                "Candidate address"
            );
            candidates.insert(IpFamily::of(address), content);
        }
    }

    candidates
}

/// Parses the JSON listing produced by `ip -json addr show` into
/// per-interface observations. Entries that are not parseable addresses
/// (peer-less point-to-point slots and the like) are skipped.
pub fn parse_address_listing(
    listing: &str,
) -> Result<Vec<InterfaceObservation>, DiscoveryError> {
    let links: Vec<IpCommandLink> =
        serde_json::from_str(listing).map_err(|source| DiscoveryError::CommandOutput {
            command: IP_COMMAND.to_string(),
            source,
        })?;

    Ok(links
        .into_iter()
        .map(|link| InterfaceObservation {
            name: link.ifname,
            addresses: link
                .addr_info
                .into_iter()
                .filter_map(|info| info.local)
                .filter_map(|local| local.parse::<IpAddr>().ok())
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(name: &str, addresses: &[&str]) -> InterfaceObservation {
        InterfaceObservation {
            name: name.to_string(),
            addresses: addresses.iter().map(|a| a.parse().unwrap()).collect(),
        }
    }

    fn filter(allow: &[&str], deny: &[&str]) -> DiscoveryFilter {
        DiscoveryFilter::new(
            &allow.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            &deny.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn interface_outside_allow_list_is_ignored() {
        let observations = vec![
            observation("wan0", &["203.0.113.7"]),
            observation("docker0", &["198.51.100.2"]),
        ];
        let candidates = discover(&observations, &filter(&["wan"], &[]));
        assert_eq!(candidates.ipv4, vec!["203.0.113.7"]);
        assert!(candidates.ipv6.is_empty());
    }

    #[test]
    fn empty_allow_list_accepts_every_interface() {
        let observations = vec![
            observation("eth0", &["203.0.113.7"]),
            observation("eth1", &["198.51.100.2"]),
        ];
        let candidates = discover(&observations, &filter(&[], &[]));
        assert_eq!(candidates.ipv4, vec!["203.0.113.7", "198.51.100.2"]);
    }

    #[test]
    fn blacklisted_addresses_never_become_candidates() {
        let observations = vec![observation(
            "eth0",
            &[
                "127.0.0.1",
                "10.0.0.4",
                "192.168.1.20",
                "203.0.113.7",
                "fe80::1",
                "fd19:beef::2",
                "2001:db8::1",
            ],
        )];
        let deny = ["fe80", "127\\.", "fd", "10\\.", "192\\.168", "::"];
        let candidates = discover(&observations, &filter(&[], &deny));
        assert_eq!(candidates.ipv4, vec!["203.0.113.7"]);
        assert_eq!(candidates.ipv6, vec!["2001:db8::1"]);
    }

    #[test]
    fn blacklist_patterns_are_anchored_at_the_start() {
        // 127 appears inside the address but not at the start.
        let observations = vec![observation("eth0", &["203.0.127.1"])];
        let candidates = discover(&observations, &filter(&[], &["127\\."]));
        assert_eq!(candidates.ipv4, vec!["203.0.127.1"]);
    }

    #[test]
    fn duplicates_are_collapsed_within_a_family() {
        let observations = vec![
            observation("eth0", &["203.0.113.7", "2001:db8::1"]),
            observation("eth1", &["203.0.113.7", "2001:db8::1"]),
        ];
        let candidates = discover(&observations, &filter(&[], &[]));
        assert_eq!(candidates.ipv4, vec!["203.0.113.7"]);
        assert_eq!(candidates.ipv6, vec!["2001:db8::1"]);
    }

    #[test]
    fn candidate_order_is_first_seen() {
        let observations = vec![
            observation("eth0", &["198.51.100.2"]),
            observation("eth1", &["203.0.113.7"]),
        ];
        let candidates = discover(&observations, &filter(&[], &[]));
        assert_eq!(candidates.ipv4, vec!["198.51.100.2", "203.0.113.7"]);
    }

    #[test]
    fn parses_ip_command_json() {
        let listing = r#"[
            {
                "ifindex": 1,
                "ifname": "lo",
                "addr_info": [
                    {"family": "inet", "local": "127.0.0.1", "prefixlen": 8},
                    {"family": "inet6", "local": "::1", "prefixlen": 128}
                ]
            },
            {
                "ifindex": 2,
                "ifname": "wan0",
                "addr_info": [
                    {"family": "inet", "local": "203.0.113.7", "prefixlen": 24},
                    {"family": "inet6", "local": "2001:db8::1", "prefixlen": 64},
                    {"family": "inet6", "prefixlen": 64}
                ]
            }
        ]"#;

        let observations = parse_address_listing(listing).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].name, "lo");
        assert_eq!(observations[1].name, "wan0");
        assert_eq!(observations[1].addresses.len(), 2);
        assert_eq!(observations[1].addresses[0].to_string(), "203.0.113.7");
        assert_eq!(observations[1].addresses[1].to_string(), "2001:db8::1");
    }

    #[test]
    fn rejects_non_json_listings() {
        let err = parse_address_listing("1: lo: <LOOPBACK,UP>").unwrap_err();
        assert!(matches!(err, DiscoveryError::CommandOutput { .. }));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = DiscoveryFilter::new(&["(".to_string()], &[]).unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidPattern { .. }));
    }
}
