//! Douban-Meta command-line entry point
//!
//! Looks up one query against the book or movie catalog and prints the
//! resulting records as JSON lines.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use douban_meta::config::{load_config, Config};
use douban_meta::sink::{JsonLinesSink, RecordSink};
use douban_meta::{Kind, Provider};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Douban-Meta: catalog metadata lookup
///
/// Searches Douban for a title, ISBN or IMDb id, loads the top candidates
/// and prints one JSON record per line.
#[derive(Parser, Debug)]
#[command(name = "douban-meta")]
#[command(version)]
#[command(about = "Book and movie metadata lookup", long_about = None)]
struct Cli {
    /// Catalog to search
    #[arg(value_enum)]
    kind: KindArg,

    /// Free-text query (title, ISBN, IMDb id, ...)
    query: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only print the first record found
    #[arg(long)]
    one: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Book,
    Movie,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Book => Kind::Book,
            KindArg::Movie => Kind::Movie,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    let provider = Provider::new(cli.kind.into(), &config)?;
    let records = if cli.one {
        provider.search_one(&cli.query).await.into_iter().collect()
    } else {
        provider.search(&cli.query).await
    };

    if records.is_empty() {
        tracing::warn!("No {} found for '{}'", provider.kind(), cli.query);
    }

    let mut sink = JsonLinesSink::new(std::io::stdout().lock());
    for record in &records {
        sink.update_record(&cli.query, record)?;
    }

    tracing::info!(
        "Wrote {} record(s); cache holds {}",
        sink.written(),
        provider.cache().len()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("douban_meta=info,warn"),
            1 => EnvFilter::new("douban_meta=debug,info"),
            2 => EnvFilter::new("douban_meta=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
