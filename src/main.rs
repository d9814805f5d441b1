//! Domain-Prospector main entry point
//!
//! This is the command-line interface for the brute-force domain surveyor.

use clap::Parser;
use domain_prospector::config::{load_config_with_hash, Config};
use domain_prospector::crawler::crawl;
use domain_prospector::generator::candidate_count;
use domain_prospector::output::{compute_statistics, load_snapshot, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Domain-Prospector: a brute-force domain surveyor
///
/// Enumerates candidate domain names, fetches whatever answers, maps each
/// reachable site's internal links to a bounded depth, and keeps CSV and
/// JSON reports current after every find.
#[derive(Parser, Debug)]
#[command(name = "domain-prospector")]
#[command(version = "0.1.0")]
#[command(about = "A brute-force domain surveyor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics from an existing JSON report and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("domain_prospector=info,warn"),
            1 => EnvFilter::new("domain_prospector=debug,info"),
            2 => EnvFilter::new("domain_prospector=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Domain-Prospector Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max retries: {}", config.crawler.max_retries);
    println!("  Timeout: {}s", config.crawler.timeout_secs);
    println!("  Sleep between candidates/retries: {}s", config.crawler.sleep_secs);
    println!("  Target domain count: {}", config.crawler.max_domains);

    println!("\nGenerator:");
    println!("  Start length: {}", config.generator.start_length);
    match config.generator.max_length {
        Some(cap) => println!("  Length cap: {}", cap),
        None => println!("  Length cap: none (unbounded)"),
    }
    println!("  Extensions: {}", config.generator.extensions.join(", "));
    println!(
        "  Candidates at start length: {}",
        candidate_count(
            config.generator.start_length,
            config.generator.extensions.len()
        )
    );

    println!("\nIdentity pool: {} user agents", config.identity.user_agents.len());

    println!("\nOutput:");
    println!("  CSV report: {}", config.output.csv_path);
    println!("  JSON report: {}", config.output.json_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: summarizes an existing JSON report
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    use std::path::Path;

    println!("Report: {}\n", config.output.json_path);

    let snapshot = load_snapshot(Path::new(&config.output.json_path))?;
    let stats = compute_statistics(&snapshot);
    print_statistics(&stats);

    println!("\nGenerated at: {}", snapshot.generated_at);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl: target {} domains, depth {}, {} extensions",
        config.crawler.max_domains,
        config.crawler.max_depth,
        config.generator.extensions.len()
    );

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
