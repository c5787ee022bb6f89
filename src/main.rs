mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;
mod vuln_export;

use adapters::outbound::filesystem::{data_dir, ExportWriter};
use adapters::outbound::network::NucleusClient;
use adapters::outbound::pacing::FixedDelayPacer;
use application::dto::ExportRequest;
use application::use_cases::ExportVulnsUseCase;
use cli::Args;
use config::Config;
use ports::inbound::VulnExportPort;
use shared::error::ExitCode;
use shared::Result;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments; clap exits with code 2 on bad usage
    let args = Args::parse_args();

    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    info!(
        endpoint = %config.api_endpoint,
        group = %config.asset_group,
        "starting Nucleus export"
    );

    // Prepare the output directory before any API call is spent
    let data_dir = data_dir::prepare(&config.data_dir, args.keep_data)?;

    // Create use case with injected adapters (Dependency Injection)
    let use_case = ExportVulnsUseCase::new(
        NucleusClient::new(&config.api_endpoint, &config.api_key)?,
        FixedDelayPacer::default(),
        ExportWriter::new(data_dir),
    );

    let summary = use_case.export(ExportRequest::from_config(&config))?;

    info!(
        assets = summary.asset_count,
        vulnerable = summary.vulnerable_count,
        files = summary.files_written,
        "export complete"
    );
    eprintln!(
        "✅ Export complete: {} assets listed, {} vulnerable, {} files written",
        summary.asset_count, summary.vulnerable_count, summary.files_written
    );

    Ok(())
}

/// Wires `LOGLEVEL` into the subscriber. An unparsable level falls back to
/// `warn` instead of failing the run.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
