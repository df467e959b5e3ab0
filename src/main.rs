//! Site-Indexer main entry point
//!
//! Command-line front end: crawls a site, indexes its words and writes the
//! result as a JSON report.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use site_indexer::config::{load_config, validate, Config};
use site_indexer::crawler::{Crawl, Crawler, HttpFetcher, PageFetcher};
use site_indexer::index::{build_indexer, WordIndexer};
use site_indexer::output::{print_statistics, print_top_words, IndexReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Site-Indexer: count the words of a website
///
/// Fetches the page at URL, follows its links up to the configured depth,
/// and counts every word found across the fetched pages.
#[derive(Parser, Debug)]
#[command(name = "site-indexer")]
#[command(version)]
#[command(about = "Crawl a site and build a word-frequency index", long_about = None)]
struct Cli {
    /// Absolute http(s) URL to start from
    #[arg(value_name = "URL")]
    url: String,

    /// Hop levels to follow from the start page (overrides the config file)
    #[arg(short = 'd', long = "depth", value_name = "DEPTH")]
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the JSON report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the N most frequent words instead of the JSON report
    #[arg(long, value_name = "N", conflicts_with = "output")]
    top: Option<usize>,

    /// Print crawl statistics to stderr when done
    #[arg(long)]
    stats: bool,

    /// Emit the JSON report on a single line
    #[arg(long)]
    compact: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let max_depth = config.crawler.max_depth;

    let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
    let mut indexer = build_indexer(&config.tokenizer);

    let started_at = Utc::now();
    let mut crawl = Crawler::new(&fetcher)
        .with_page_limit(config.crawler.max_pages)
        .crawl(&cli.url, max_depth)
        .with_context(|| format!("Cannot index '{}'", cli.url))?;

    let timed_out = match config.crawler.timeout_secs {
        Some(secs) => {
            let budget = Duration::from_secs(secs);
            let finished = tokio::time::timeout(budget, run_crawl(&mut crawl, &mut indexer))
                .await
                .is_ok();
            if !finished {
                tracing::warn!(
                    "Crawl stopped after {}s, reporting partial index ({} pages visited)",
                    secs,
                    crawl.visited_count()
                );
            }
            !finished
        }
        None => {
            run_crawl(&mut crawl, &mut indexer).await;
            false
        }
    };

    let stats = crawl.into_stats();
    tracing::info!(
        "Crawl completed: {} documents, {} distinct words",
        stats.documents,
        indexer.len()
    );

    if cli.stats {
        print_statistics(&stats, &mut io::stderr()).context("Failed to print statistics")?;
    }

    let report =
        IndexReport::new(&cli.url, max_depth, started_at, stats, &indexer).with_timeout(timed_out);
    write_report(&cli, &report)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the report on stdout stays machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_indexer=info,warn"),
            1 => EnvFilter::new("site_indexer=debug,info"),
            2 => EnvFilter::new("site_indexer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given and applies command-line overrides
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

/// Feeds every crawled document to the indexer
async fn run_crawl<F: PageFetcher + ?Sized>(crawl: &mut Crawl<'_, F>, indexer: &mut WordIndexer) {
    while let Some(document) = crawl.next_document().await {
        let added = indexer.index_text(&document.body);
        tracing::debug!(
            "Indexed {} at depth {} ({} tokens)",
            document.url,
            document.depth,
            added
        );
    }
}

fn write_report(cli: &Cli, report: &IndexReport) -> Result<()> {
    if let Some(n) = cli.top {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        print_top_words(&report.top_words(n), &mut out).context("Failed to print words")?;
        return Ok(());
    }

    let pretty = !cli.compact;
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            report.write_json(&mut out, pretty)?;
            out.flush()?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.write_json(&mut out, pretty)?;
        }
    }

    Ok(())
}
