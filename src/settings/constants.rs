/// Environment variable naming an explicit configuration file path.
pub const ENV_CONFIG_PATH: &str = "DDNS_SYNC_CONFIG_PATH";

/// Prefix for environment-variable overrides, e.g. `DDNS_SYNC__DOMAIN`.
pub const ENV_PREFIX: &str = "DDNS_SYNC";

/// TTL in seconds for created records when none is configured.
pub const DEFAULT_TTL: u32 = 120;

/// Address patterns discarded by default: link-local, loopback,
/// unique-local, the private IPv4 ranges and the compressed-zero prefix.
/// Each pattern is a regex anchored at the start of the address text.
pub const DEFAULT_ADDRESS_BLACKLIST: &[&str] = &[
    "fe80",
    "127\\.",
    "fd",
    "10\\.",
    "172\\.",
    "192\\.168",
    "::",
];

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Example configuration, written to the default path on first run.
pub const DEFAULT_CONFIG: &str = r#"# Zone name at the DNS provider.
#domain = "example.com"

# Name prefix identifying the records this tool owns. Addresses are
# published under <prefix>-v4.<domain> and <prefix>-v6.<domain>.
#prefix = "ddns"

# Provider API token. Prefer the DDNS_API_TOKEN environment variable.
#api_token = "your_api_token"

# TTL in seconds for created records. 1 means provider-automatic.
ttl = 120

# Interface name patterns to allow. Empty accepts every interface.
# A pattern matches anywhere in the name, so "wan" accepts "wan0".
interfaces = []

# Address patterns to discard, anchored at the start of the address.
# Uncomment to replace the built-in blacklist.
#blacklist = ["fe80", "127\\.", "fd", "10\\.", "172\\.", "192\\.168", "::"]

# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"
"#;
