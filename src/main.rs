use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;

mod app;
mod config;
mod domain;
mod error;
mod infra;
mod logging;
mod pipeline;
mod server;

use crate::app::ports::GeocoderPort;
use crate::app::process_use_case::{ProcessUseCase, RunTargets};
use crate::config::{Config, LocationStrategy};
use crate::error::{Result, ScrubberError};
use crate::infra::archive_fs::FsArchiveAdapter;
use crate::infra::geocoder_http::HttpGeocoder;
use crate::infra::grid_fs::FsGridAdapter;
use crate::pipeline::normalize::LocationResolver;
use crate::pipeline::Pipeline;
use crate::server::start_server;

#[derive(Parser)]
#[command(name = "contact_scrubber")]
#[command(about = "Contact record cleaning and normalization pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one cleaning batch and exit
    Run,
    /// Serve the HTTP trigger endpoint
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

fn build_use_case(config: &Config) -> Result<ProcessUseCase> {
    let location = match config.location_strategy {
        LocationStrategy::Offline => LocationResolver::Offline,
        LocationStrategy::Geocode => {
            // from_env already guarantees the URL is present for this strategy
            let url = config.geocoder_url.as_deref().ok_or_else(|| {
                ScrubberError::Config("GEOCODER_URL is required for geocoding".to_string())
            })?;
            let geocoder: Arc<dyn GeocoderPort> =
                Arc::new(HttpGeocoder::new(url, config.geocoder_timeout)?);
            LocationResolver::Geocode(geocoder)
        }
    };

    Ok(ProcessUseCase::new(
        Arc::new(FsGridAdapter),
        Arc::new(FsGridAdapter),
        Arc::new(FsArchiveAdapter),
        Pipeline::new(location),
        RunTargets {
            source_handle: config.source_handle.clone(),
            sink_handle: config.sink_handle.clone(),
            archive_folder: config.archive_folder.clone(),
        },
    ))
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();

    // Fail fast on missing configuration, before any row is touched
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let use_case = Arc::new(build_use_case(&config)?);

    match cli.command {
        Commands::Run => {
            println!("🧹 Running cleaning batch...");
            match use_case.execute().await {
                Ok(file_id) => {
                    println!("✅ Batch complete. Archived file ID: {file_id}");
                }
                Err(e) => {
                    error!("batch run failed: {e}");
                    eprintln!("❌ Batch failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            start_server(use_case, port).await?;
        }
    }
    Ok(())
}
