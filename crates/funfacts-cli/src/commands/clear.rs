//! Clear command implementation.

use crate::cli::ClearArgs;
use crate::commands::confirm;
use crate::error::Result;
use crate::output::Formatter;
use funfacts_domain::KeyValueStore;
use funfacts_scores::ScoreManager;
use std::fmt::Display;

/// Execute the clear command.
pub fn execute_clear<S>(
    args: ClearArgs,
    scores: &mut ScoreManager<S>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
{
    if !args.yes {
        let count = scores.try_get_all_scores()?.len();
        println!("About to delete {} score(s) and any game in progress.", count);
        if !confirm("Continue?")? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    scores.try_clear_all_scores()?;
    println!("{}", formatter.success("All scores cleared"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use funfacts_store::MemoryStore;

    #[test]
    fn test_clear_with_yes_skips_prompt() {
        let mut scores = ScoreManager::with_defaults(MemoryStore::new());
        scores.save_current_score(3, 3);
        scores.finalize_score();
        scores.save_current_score(1, 1);

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_clear(ClearArgs { yes: true }, &mut scores, &formatter).unwrap();

        assert!(scores.get_all_scores().is_empty());
        assert!(scores.get_current_score().is_none());
    }
}
