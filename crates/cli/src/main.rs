use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "zonecrawl")]
#[command(version)]
#[command(about = "Zonecrawl - recursive DNS zone transfer crawler")]
struct Cli {
    /// Domain to start from
    domain: String,

    /// Directory receiving zone dumps and metadata
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config()?;
    bootstrap::init_logging(&config);

    info!("Starting zonecrawl v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config, &cli.output_dir)
        .await
        .map_err(|e| {
            error!(error = %e, "Cannot use output directory");
            anyhow::anyhow!(e)
        })?;
    let use_cases = di::UseCases::new(&adapters);

    let report = use_cases
        .run_recon
        .execute(&cli.domain)
        .await
        .map_err(|e| {
            error!(domain = %cli.domain, error = %e, "Run aborted");
            anyhow::anyhow!(e)
        })?;

    println!(
        "{}: {} zone file(s), {} top name server(s), {} transfer(s), {} lookup(s) -> {}",
        report.domain,
        report.zone_file_count(),
        report.top_name_server_count(),
        report.transfers_attempted,
        report.lookups_performed,
        report.metadata_location
    );

    Ok(())
}
