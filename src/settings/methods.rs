// Standard library
use std::path::{Path, PathBuf};
use std::{env, fs};

// 3rd party crates
use config::{Config, Environment, File};
use tracing::info;

// Current module imports
use super::constants::{
    DEFAULT_ADDRESS_BLACKLIST, DEFAULT_CONFIG, DEFAULT_TTL, ENV_CONFIG_PATH, ENV_PREFIX,
};
use super::errors::SettingsError;
use super::types::{Cli, FileSettings, Settings};

impl Settings {
    /// Loads and merges configuration for one run: CLI flags over
    /// environment variables over the configuration file over defaults.
    pub fn load(cli: Cli) -> Result<Self, SettingsError> {
        let file = match &cli.config {
            Some(path) => load_file(path, true)?,
            None => {
                let path = default_config_path()?;
                ensure_config_file_exists(&path)?;
                load_file(&path, false)?
            }
        };
        merge(cli, file)
    }
}

/// Determines the default configuration file path.
fn default_config_path() -> Result<PathBuf, SettingsError> {
    if let Ok(path) = env::var(ENV_CONFIG_PATH) {
        Ok(PathBuf::from(path))
    } else if let Some(config_dir) = dirs::config_dir() {
        Ok(config_dir.join("ddns-sync").join("config.toml"))
    } else {
        Err(SettingsError::NoConfigDir)
    }
}

/// Writes the commented example configuration on first run.
fn ensure_config_file_exists(config_path: &Path) -> Result<(), SettingsError> {
    if config_path.exists() {
        return Ok(());
    }
    if let Some(parent_dir) = config_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|source| SettingsError::WriteDefault {
            path: config_path.to_path_buf(),
            source,
        })?;
    }
    fs::write(config_path, DEFAULT_CONFIG).map_err(|source| SettingsError::WriteDefault {
        path: config_path.to_path_buf(),
        source,
    })?;
    info!(path = %config_path.display(), "Default configuration file created");
    Ok(())
}

/// Loads the configuration file plus environment overrides.
fn load_file(config_path: &Path, required: bool) -> Result<FileSettings, SettingsError> {
    let config_file: &str = config_path.to_str().ok_or_else(|| {
        SettingsError::Config(config::ConfigError::Message(
            "configuration file path contains invalid UTF-8 characters".to_string(),
        ))
    })?;

    let settings: Config = Config::builder()
        .add_source(File::with_name(config_file).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Merges CLI flags over file values over defaults, then validates.
pub(super) fn merge(cli: Cli, file: FileSettings) -> Result<Settings, SettingsError> {
    let domain = cli
        .domain
        .or(file.domain)
        .filter(|v| !v.trim().is_empty())
        .ok_or(SettingsError::Missing {
            name: "domain",
            flag: "domain",
        })?;
    let prefix = cli
        .prefix
        .or(file.prefix)
        .filter(|v| !v.trim().is_empty())
        .ok_or(SettingsError::Missing {
            name: "prefix",
            flag: "prefix",
        })?;
    let api_token = cli
        .api_token
        .or(file.api_token)
        .filter(|v| !v.trim().is_empty())
        .ok_or(SettingsError::Missing {
            name: "api_token",
            flag: "api-token",
        })?;

    let ttl = cli.ttl.or(file.ttl).unwrap_or(DEFAULT_TTL);
    if ttl != 1 && !(60..=86400).contains(&ttl) {
        return Err(SettingsError::InvalidTtl(ttl));
    }

    let log_level = cli
        .log_level
        .unwrap_or(file.log.level)
        .to_lowercase();
    if !matches!(
        log_level.as_str(),
        "error" | "warn" | "info" | "debug" | "trace"
    ) {
        return Err(SettingsError::InvalidLogLevel(log_level));
    }

    let interfaces = if cli.interfaces.is_empty() {
        file.interfaces
    } else {
        cli.interfaces
    };

    let blacklist = file.blacklist.unwrap_or_else(|| {
        DEFAULT_ADDRESS_BLACKLIST
            .iter()
            .map(|p| p.to_string())
            .collect()
    });

    Ok(Settings {
        domain,
        prefix,
        api_token,
        ttl,
        interfaces,
        blacklist,
        log_level,
    })
}
