//! Genre-Harvest main entry point
//!
//! Command-line interface for the genre catalog crawler.

use clap::Parser;
use genre_harvest::config::load_config_with_hash;
use genre_harvest::crawler::Crawler;
use genre_harvest::output::write_outputs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Genre-Harvest: a catalog crawler that deduplicates across genres
///
/// Discovers every genre from the configured seed page, walks each genre's
/// pagination chain to exhaustion, and writes the deduplicated collection
/// to JSON and CSV.
#[derive(Parser, Debug)]
#[command(name = "genre-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A genre catalog crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, &config_hash);
        return Ok(());
    }

    tracing::info!("== Starting the scraper ==");

    let mut crawler = Crawler::new(config.clone())?;
    let records = match crawler.run().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let (json_path, csv_path) =
        write_outputs(records, PathBuf::from(&config.output.directory).as_path())?;

    println!("{} unique titles collected", records.len());
    println!("JSON: {}", json_path.display());
    println!("CSV:  {}", csv_path.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("genre_harvest=info,warn"),
            1 => EnvFilter::new("genre_harvest=debug,info"),
            2 => EnvFilter::new("genre_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &genre_harvest::config::Config, config_hash: &str) {
    println!("=== Genre-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Seed URL: {}", config.site.seed_url);
    println!("  Base URL: {}", config.site.base_url);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\nConfig hash: {}", config_hash);
    println!("\n✓ Configuration is valid");
}
