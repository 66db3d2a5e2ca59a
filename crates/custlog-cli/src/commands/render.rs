//! Render command
//!
//! Usage: custlog render --rows <FILE> [--actors <FILE>] [--tags <FILE>]
//! [--config <FILE>] [--format text|json] [--output <FILE>]

use clap::{Args, ValueEnum};
use custlog_core::errors::{ExError, ExErrorKind, Result};
use custlog_core::{
    render_feed_text, summarize, ActionType, ActorDirectory, ClassifyContext, FeedFilter,
    TagDirectory,
};
use std::path::PathBuf;

use super::input::{load_actors, load_policy, load_rows, load_tags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file with the audit rows
    #[arg(long)]
    pub rows: PathBuf,

    /// JSON file mapping user ids to names
    #[arg(long)]
    pub actors: Option<PathBuf>,

    /// JSON file with the tag list
    #[arg(long)]
    pub tags: Option<PathBuf>,

    /// TOML render policy (default: built-in Thai policy)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only render these fields (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Only keep entries with these actions
    #[arg(long = "action")]
    pub actions: Vec<ActionType>,

    /// Only keep entries for this customer
    #[arg(long)]
    pub customer: Option<String>,

    /// Keep at most this many items
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    fn filter(&self) -> FeedFilter {
        FeedFilter {
            allowed_fields: self.fields.clone(),
            actions: (!self.actions.is_empty()).then(|| self.actions.clone()),
            customer_id: self.customer.clone(),
            limit: self.limit,
        }
    }
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let policy = load_policy(args.config.as_deref())?;
    let rows = load_rows(&args.rows)?;
    let actors = match &args.actors {
        Some(path) => load_actors(path)?,
        None => ActorDirectory::new(),
    };
    let tags = match &args.tags {
        Some(path) => load_tags(path)?,
        None => TagDirectory::new(),
    };

    let ctx = ClassifyContext::new(&actors, &tags, &policy);
    let feed = summarize(&rows, &ctx, &args.filter());

    let rendered = match args.format {
        OutputFormat::Text => render_feed_text(&feed, &policy),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&feed)?),
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("write_output")
                .with_entity_id(output_path.display().to_string())
                .with_message(format!("Failed to write file: {}", e))
        })?;
        println!("✓ Rendered {} items to {}", feed.len(), output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
