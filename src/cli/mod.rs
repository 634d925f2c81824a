use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing::warn;

pub mod commands;

/// Release Timeline Bucketing
#[derive(Parser)]
#[command(name = "release-buckets")]
#[command(about = "Partition a time range into equal buckets and place release and flag markers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bucket the releases and flag changes of a timeline request file
    Bucket(commands::bucket::BucketCommand),
    /// Print the bucket boundaries for a time range
    Ranges(commands::ranges::RangesCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let app_config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        }
    };

    match cli.command {
        Commands::Bucket(command) => command.run(&app_config),
        Commands::Ranges(command) => command.run(&app_config),
    }
}
