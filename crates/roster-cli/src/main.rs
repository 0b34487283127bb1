//! `roster`: interactive shell for a small classroom roster.
//!
//! # Usage
//!
//! ```
//! roster
//! roster --db ~/grades/students.db
//! roster --config ~/.config/roster/roster.toml
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

mod settings;
mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster_store_sqlite::SqliteStore;
use shell::Shell;
use tokio::io::BufReader;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Manage students and their grades")]
struct Args {
  /// Path to an optional TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "roster.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "PATH")]
  db: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Stdout belongs to the menu; diagnostics go to stderr.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let mut shell_cfg = settings::load(&args.config)?;
  if let Some(db) = args.db {
    shell_cfg.store_path = db;
  }
  let store_path = settings::expand_tilde(&shell_cfg.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "store ready");

  let mut shell = Shell::new(store, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
  shell.run().await.context("terminal i/o failed")?;

  let (store, _) = shell.into_parts();
  store.close().await.context("failed to close store")?;

  Ok(())
}
