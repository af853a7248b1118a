//! Command-line interface components.

use crate::config::FetchConfig;
use crate::constants::{DEFAULT_MAX_RECORDS, DEFAULT_STATION_ID};
use crate::fetch::NdbcClient;
use crate::models::{Feed, Observation, StationId};
use crate::output::{self, OutputFormat};
use crate::parser::build_observations;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone)]
#[command(name = "ndbc_buoy")]
#[command(about = "Fetch NOAA NDBC buoy observations as JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Station identifier (e.g. 44030)
    #[arg(short = 'i', long = "id", default_value = DEFAULT_STATION_ID)]
    pub station: StationId,

    /// Maximum number of records to return, newest first (0 = all)
    #[arg(short = 'm', long = "max", default_value_t = DEFAULT_MAX_RECORDS)]
    pub max_records: usize,

    /// Which published feed to read
    #[arg(long, value_enum, default_value_t = Feed::FiveDay)]
    pub feed: Feed,

    /// Output document format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Parse a previously downloaded feed file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override the provider web root
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the request timeout
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Environment-layered configuration with command-line overrides applied
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let mut config = FetchConfig::from_env()?;

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Initialise stderr logging; `RUST_LOG` takes precedence over the flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ndbc_buoy={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read observations from the input file or the provider
pub async fn load_observations(args: &Args) -> Result<Vec<Observation>> {
    match &args.input {
        Some(path) => {
            info!("Reading feed from {}", path.display());
            let raw = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read feed file {}", path.display()))?;
            let observations = build_observations(&raw, args.max_records)
                .with_context(|| format!("Failed to parse feed file {}", path.display()))?;
            Ok(observations)
        }
        None => {
            let client = NdbcClient::new(args.fetch_config()?)?;
            let observations = client
                .fetch_observations(args.feed, &args.station, args.max_records)
                .await
                .with_context(|| {
                    format!("Failed to load observations for station {}", args.station)
                })?;
            Ok(observations)
        }
    }
}

/// Load observations and write the document to `writer`; returns the record count
pub async fn run_with_writer<W: Write>(args: &Args, writer: &mut W) -> Result<usize> {
    let observations = load_observations(args).await?;
    info!("Writing {} observations", observations.len());

    output::write_document(writer, &observations, args.format)?;
    Ok(observations.len())
}

/// Load observations and write the document to stdout
pub async fn run(args: &Args) -> Result<usize> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(args, &mut handle).await
}
