// Standard library
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::error;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use ddns_sync::functions::run;
use ddns_sync::settings::types::{Cli, Settings};

/// Entry point for one reconciliation pass.
///
/// Exit codes: 0 when the pass completed (even with per-record failures),
/// 1 when a fatal step failed (zone resolution, record listing, interface
/// enumeration), 2 on a configuration error.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();
    let settings: Settings = match Settings::load(cli) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet at this point.
            eprintln!("configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(&settings.log_level)
        .add_directive("hyper_util=error".parse().expect("static directive"))
        .add_directive("reqwest=error".parse().expect("static directive"))
        .add_directive("hyper=error".parse().expect("static directive"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    match run(&settings).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Reconciliation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
