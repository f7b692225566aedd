//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FunFacts - Guess whether each statement is true or false.
#[derive(Debug, Parser)]
#[command(name = "funfacts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FUNFACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database file path
    #[arg(long, global = true, env = "FUNFACTS_DB")]
    pub db: Option<PathBuf>,

    /// Use only the bundled facts, never the network
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play an interactive session (default)
    Play(PlayArgs),

    /// Print facts without playing
    Fact(FactArgs),

    /// Show score history and the best score
    Scores(ScoresArgs),

    /// Delete scores from history
    Delete(DeleteArgs),

    /// Delete all scores and the in-progress score
    Clear(ClearArgs),

    /// Inspect or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the play command.
#[derive(Debug, Default, Parser)]
pub struct PlayArgs {
    /// Stop after this many answered facts
    #[arg(short, long)]
    pub rounds: Option<u32>,
}

/// Arguments for the fact command.
#[derive(Debug, Parser)]
pub struct FactArgs {
    /// Number of facts to print
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Reveal the answer and explanation
    #[arg(short, long)]
    pub reveal: bool,

    /// List the bundled facts in a category instead
    #[arg(long)]
    pub category: Option<String>,

    /// Look up one Useless Facts entry by its id
    #[arg(long, conflicts_with = "category")]
    pub id: Option<String>,
}

/// Arguments for the scores command.
#[derive(Debug, Parser)]
pub struct ScoresArgs {
    /// Maximum number of scores to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Score IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the clear command.
#[derive(Debug, Parser)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
