//! FunFacts CLI - Guess whether each statement is true or false.

use clap::Parser;
use funfacts_cli::commands;
use funfacts_cli::play;
use funfacts_cli::cli::PlayArgs;
use funfacts_cli::{Cli, Command, Config, Formatter};
use funfacts_scores::ScoreManager;
use funfacts_source::FactSource;
use funfacts_store::SqliteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> funfacts_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults when the file is missing
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Logging goes to stderr so it never interleaves with game output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    if let Some(db) = &cli.db {
        config.database_path = Some(db.clone());
    }
    if cli.offline {
        config.facts.remote_providers = false;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Config commands need neither the database nor the network
    let command = match cli.command {
        Some(Command::Config(args)) => {
            return commands::execute_config(args, &config, &config_path, &formatter);
        }
        Some(command) => command,
        None => Command::Play(PlayArgs::default()),
    };

    let db_path = config.database_path()?;
    tracing::debug!(path = %db_path.display(), "Opening score database");
    let store = SqliteStore::new(&db_path)?;
    let mut scores = ScoreManager::new(store, config.scores.clone())?;

    match command {
        Command::Play(args) => {
            let source = FactSource::from_config(config.facts.clone())?;
            play::run_play(source, scores, &config, &formatter, args.rounds).await?;
        }
        Command::Fact(args) => {
            let source = FactSource::from_config(config.facts.clone())?;
            commands::execute_fact(args, &source, &formatter).await?;
        }
        Command::Scores(args) => {
            commands::execute_scores(args, &scores, &formatter)?;
        }
        Command::Delete(args) => {
            commands::execute_delete(args, &mut scores, &formatter)?;
        }
        Command::Clear(args) => {
            commands::execute_clear(args, &mut scores, &formatter)?;
        }
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
