//! Scores command implementation.

use crate::cli::ScoresArgs;
use crate::error::Result;
use crate::output::Formatter;
use funfacts_domain::KeyValueStore;
use funfacts_scores::ScoreManager;
use std::fmt::Display;

/// Execute the scores command.
pub fn execute_scores<S>(
    args: ScoresArgs,
    scores: &ScoreManager<S>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
{
    let stats = scores.try_get_score_stats(None)?;
    println!("{}", formatter.format_stats(&stats, args.limit)?);
    Ok(())
}
