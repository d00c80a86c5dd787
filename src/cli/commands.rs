use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use crate::cli::output::{format_record_table, format_status_table, status_series_json};
use crate::config::DbConfig;
use crate::db::DbConnection;
use crate::repo::{WorkOrderRepo, WorkOrderSource};
use crate::report::{build_named_records, build_status_frequency, Snapshot};

#[derive(Parser)]
#[command(name = "orderlens")]
#[command(about = "Read-only work order reporting from a PostgreSQL table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show work order counts per status
    Status {
        /// Output as chart-series JSON ({"labels": [...], "values": [...]})
        #[arg(long)]
        json: bool,
    },
    /// List work orders under the seven reporting columns
    Table {
        /// Output as an array of label-keyed JSON objects
        #[arg(long)]
        json: bool,
    },
    /// Show status counts and the full listing in one refresh
    Snapshot {
        /// Output both structures as a single JSON object
        #[arg(long)]
        json: bool,
    },
}

/// Parse the command line, run one refresh cycle, and print the result.
///
/// Configuration is resolved from the environment before any connection
/// attempt; the connection lives only for this cycle and is released when
/// the client drops, whatever the exit path.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = DbConfig::from_env()?;
    let mut client = DbConnection::connect(&config).with_context(|| {
        format!(
            "Failed to reach the work order store at {}:{}",
            config.host, config.port
        )
    })?;
    let mut repo = WorkOrderRepo::new(&mut client);

    match cli.command {
        Commands::Status { json } => {
            let statuses = repo.fetch_status_values()?;
            info!("aggregating {} status value(s)", statuses.len());
            let frequency = build_status_frequency(&statuses);
            if json {
                println!("{}", serde_json::to_string_pretty(&status_series_json(&frequency))?);
            } else {
                println!("{}", format_status_table(&frequency));
            }
        }
        Commands::Table { json } => {
            let rows = repo.fetch_full_records()?;
            info!("shaping {} work order row(s)", rows.len());
            let records = build_named_records(&rows)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", format_record_table(&records));
            }
        }
        Commands::Snapshot { json } => {
            let snapshot = Snapshot::collect(&mut repo)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", format_status_table(&snapshot.status_frequency));
                println!();
                println!("{}", format_record_table(&snapshot.records));
            }
        }
    }

    Ok(())
}
