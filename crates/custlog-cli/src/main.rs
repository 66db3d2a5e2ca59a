//! custlog CLI
//!
//! Renders a customer activity feed from a JSON snapshot of audit rows

use clap::{Parser, Subcommand, ValueEnum};
use custlog_core::logging_facility::{self, Profile};
use custlog_core::log_op_error;
use custlog_core_types::RequestId;

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    /// No log output
    Off,
    /// Human-readable logs on stderr
    Text,
    /// JSON logs on stderr
    Json,
}

impl LogMode {
    fn profile(self) -> Profile {
        match self {
            LogMode::Off => Profile::Test,
            LogMode::Text => Profile::Development,
            LogMode::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "custlog")]
#[command(about = "custlog - Customer activity feed from audit rows", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, value_enum, global = true, default_value = "off")]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the activity feed as text or JSON
    Render(commands::render::RenderArgs),
    /// Print normalized entries and dropped-row reasons as JSON
    Normalize(commands::normalize::NormalizeArgs),
}

impl Commands {
    fn op(&self) -> &'static str {
        match self {
            Commands::Render(_) => "cli_render",
            Commands::Normalize(_) => "cli_normalize",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.profile());

    let request_id = RequestId::new();
    let span = tracing::info_span!("command", request_id = %request_id);
    let _guard = span.enter();

    let op = cli.command.op();
    let start = std::time::Instant::now();
    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Normalize(args) => commands::normalize::execute(args),
    };

    if let Err(e) = result {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
