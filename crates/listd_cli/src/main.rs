//! `listd` executable.
//!
//! # Responsibility
//! - Parse command line flags and initialize logging.
//! - Serve the HTTP API, or run one-shot database maintenance commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listd_api::ServerConfig;
use listd_core::db::fixtures::reseed;
use listd_core::db::migrations::current_version;
use listd_core::db::open_db;
use listd_core::{core_version, default_log_level, init_logging};
use log::info;
use std::path::PathBuf;

/// HTTP CRUD service for named lists
#[derive(Parser, Debug)]
#[command(name = "listd")]
#[command(version, about, long_about = None)]
struct Cli {
    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when omitted
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open (and migrate) the database and serve HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// SQLite database file
        #[arg(long, default_value = "listd.sqlite3")]
        db: PathBuf,
    },

    /// Replace every list with the fixture lists
    Reseed {
        #[arg(long, default_value = "listd.sqlite3")]
        db: PathBuf,
    },

    /// Apply pending migrations and print the schema version
    Migrate {
        #[arg(long, default_value = "listd.sqlite3")]
        db: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&log_level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    match cli.command {
        Command::Serve { host, port, db } => {
            let config = ServerConfig {
                host,
                port,
                db_path: db,
                log_level,
                log_dir: cli.log_dir,
            };
            listd_api::serve(&config)
                .await
                .with_context(|| format!("serving on {}", config.socket_addr()))?;
        }
        Command::Reseed { db } => {
            let conn = open_db(&db).with_context(|| format!("opening {}", db.display()))?;
            let lists = reseed(&conn).context("reseeding lists")?;
            println!("reseeded {} list(s) in {}", lists.len(), db.display());
        }
        Command::Migrate { db } => {
            let conn = open_db(&db).with_context(|| format!("opening {}", db.display()))?;
            let version = current_version(&conn).context("reading schema version")?;
            println!("{} schema version={version}", db.display());
        }
    }

    Ok(())
}
