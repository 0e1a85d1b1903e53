// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;
use serde::Deserialize;

// Current module imports
use super::constants::default_log_level;

/// Command-line arguments. Every value can also come from the
/// configuration file or the environment; flags win.
#[derive(Debug, Parser)]
#[command(name = "ddns-sync", version)]
#[command(about = "Publishes the host's locally discovered IP addresses as DNS records")]
pub struct Cli {
    /// Zone name at the DNS provider, e.g. example.com
    #[arg(long)]
    pub domain: Option<String>,

    /// Name prefix identifying the records this tool owns
    #[arg(long)]
    pub prefix: Option<String>,

    /// Provider API token
    #[arg(long, env = "DDNS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Path to the TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TTL in seconds for created records (1 means provider-automatic)
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Interface name pattern to allow; repeatable, default accepts all
    #[arg(long = "interface", value_name = "PATTERN")]
    pub interfaces: Vec<String>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Logging section of the configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Raw configuration file contents before merging with the CLI.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct FileSettings {
    pub domain: Option<String>,
    pub prefix: Option<String>,
    pub api_token: Option<String>,
    pub ttl: Option<u32>,

    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Address patterns to discard, anchored at the start of the textual
    /// address. Absent means the built-in blacklist.
    pub blacklist: Option<Vec<String>>,

    #[serde(default)]
    pub log: Log,
}

/// Fully merged and validated settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub domain: String,
    pub prefix: String,
    pub api_token: String,
    pub ttl: u32,
    pub interfaces: Vec<String>,
    pub blacklist: Vec<String>,
    pub log_level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
