//! Normalize command
//!
//! Usage: custlog normalize --rows <FILE> [--config <FILE>]

use clap::Args;
use custlog_core::errors::Result;
use custlog_core::normalize_rows;
use std::path::PathBuf;

use super::input::{load_policy, load_rows};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// JSON file with the audit rows
    #[arg(long)]
    pub rows: PathBuf,

    /// TOML render policy (default: built-in Thai policy)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute normalize command
pub fn execute(args: NormalizeArgs) -> Result<()> {
    let policy = load_policy(args.config.as_deref())?;
    let rows = load_rows(&args.rows)?;

    let normalized = normalize_rows(&rows, &policy);
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
