//! seriesctl - catalog sync and series upload tool
//!
//! Front end for the series store: initializes schemas, syncs the metric
//! taxonomy from a catalog YAML, uploads CSV value sheets, and exports or
//! inspects the stored data.

mod config;
mod export;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use config::Config;
use series_ingest::{run_sync, run_upload};
use series_model::{Catalog, Frame};
use series_store::{init_schema, table_counts, SqliteClient};

#[derive(Parser)]
#[command(name = "seriesctl")]
#[command(about = "Catalog sync and series upload tool")]
struct Cli {
    /// Target store name (prompts when omitted; blank picks the configured default)
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the store schema
    Init,
    /// Sync the catalog hierarchy and metric registry
    Sync {
        /// Catalog YAML path
        #[arg(long, default_value = "config/catalog.yaml")]
        catalog: PathBuf,
    },
    /// Upload series values from a CSV sheet
    Upload {
        /// Catalog YAML path
        #[arg(long, default_value = "config/catalog.yaml")]
        catalog: PathBuf,
        /// CSV sheet with period,entity,metric,value columns
        #[arg(long)]
        data: PathBuf,
    },
    /// Export observations joined with metric names to CSV
    Export {
        /// Output file (defaults to series_export_<date>.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show row counts for the selected store
    Status,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Resolve the target store: CLI flag first, otherwise an interactive
/// prompt where blank input selects the configured default.
fn resolve_store(cli_store: Option<String>, config: &Config) -> Result<String> {
    if let Some(store) = cli_store {
        return Ok(store);
    }

    print!("Choose store to update (leave blank for default): ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(config.default_store.clone())
    } else {
        Ok(trimmed.to_string())
    }
}

fn load_catalog(path: &PathBuf) -> Result<Catalog> {
    Catalog::from_yaml_file(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = resolve_store(cli.store, &config)?;
    let db_path = config.store_path(&store);

    let client = SqliteClient::new(&db_path)
        .await
        .with_context(|| format!("Failed to open store {}", db_path.display()))?;

    match cli.command {
        Commands::Init => {
            init_schema(client.pool()).await?;
            println!("{} Store '{}' initialized", "OK".green().bold(), store);
        },
        Commands::Sync { catalog } => {
            let catalog = load_catalog(&catalog)?;
            init_schema(client.pool()).await?;
            let stats = run_sync(client.pool(), &catalog)
                .await
                .context("Hierarchy sync failed; all changes rolled back")?;
            println!(
                "{} Metadata sync complete in '{}': {} nodes, {} metrics",
                "OK".green().bold(),
                store,
                stats.nodes,
                stats.metrics
            );
        },
        Commands::Upload { catalog, data } => {
            let catalog = load_catalog(&catalog)?;
            let frame = Frame::from_csv_path(&data)
                .with_context(|| format!("Failed to read sheet {}", data.display()))?;
            let report = run_upload(client.pool(), &frame, &catalog)
                .await
                .context("Upload failed; all changes rolled back")?;
            println!(
                "{} Data upload complete in '{}': {} periods, {} values written, {} cells skipped",
                "OK".green().bold(),
                store,
                report.periods,
                report.written,
                report.skipped
            );
        },
        Commands::Export { output } => match export::export_observations(client.pool(), output)
            .await?
        {
            Some(path) => {
                println!("{} Exported to {}", "OK".green().bold(), path.display());
            },
            None => {
                println!("{} No observations to export", "--".yellow().bold());
            },
        },
        Commands::Status => {
            let counts = table_counts(client.pool()).await?;
            println!("Store '{}' ({})", store.bold(), db_path.display());
            println!("  hierarchy nodes: {}", counts.hierarchy);
            println!("  metrics:         {}", counts.metrics);
            println!("  observations:    {}", counts.observations);
        },
    }

    Ok(())
}
