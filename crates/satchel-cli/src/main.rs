// Rust guideline compliant 2026-10-18

//! Satchel CLI Application
//!
//! Command-line front end for the Satchel inventory manager.

use anyhow::Context;
use clap::Parser;
use satchel_cli::{commands, logging, should_use_color};
use satchel_core::{Config, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    version,
    about = "Satchel: a small fixed-capacity inventory manager",
    long_about = "Satchel keeps a small inventory of named items in memory for one session. Items can be added, removed, listed, searched by name, sorted by name, category or priority, and looked up by binary search once sorted by name.",
    after_help = "Examples:\n  satchel\n  satchel --capacity 5 --format plain\n  satchel --json < commands.txt\n  satchel init\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Number of item slots (1-100)
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if let Some(Commands::Init { force }) = cli.command {
        return commands::init::execute(&config_path, force);
    }

    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Flags override the file and environment
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.to_lowercase();
    }
    config.output_format = match cli.format {
        Some(OutputFormat::Json) => satchel_core::OutputFormat::Json,
        Some(OutputFormat::Table) => satchel_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => satchel_core::OutputFormat::Plain,
        None if cli.json => satchel_core::OutputFormat::Json,
        None => config.output_format,
    };
    config.color = config.color && !cli.no_color && should_use_color();
    config.validate()?;

    let _guard = logging::init_tracing(&config.log_level, cli.log_file.as_deref())?;

    commands::menu::execute(&config)
}
