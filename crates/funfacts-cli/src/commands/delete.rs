//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::commands::confirm;
use crate::error::Result;
use crate::output::Formatter;
use funfacts_domain::KeyValueStore;
use funfacts_scores::ScoreManager;
use std::fmt::Display;

/// Execute the delete command.
pub fn execute_delete<S>(
    args: DeleteArgs,
    scores: &mut ScoreManager<S>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
{
    if !args.yes {
        println!("About to delete {} score(s):", args.ids.len());
        for id in &args.ids {
            println!("  - {}", id);
        }
        if !confirm("Continue?")? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let (deleted, missing) = delete_scores(&args.ids, scores)?;

    if !deleted.is_empty() {
        println!("{}", formatter.success(&format!("Deleted {} score(s)", deleted.len())));
    }
    for id in &missing {
        println!("{}", formatter.warning(&format!("No score with id {}", id)));
    }

    Ok(())
}

/// Delete each id, returning `(deleted, missing)`.
pub fn delete_scores<S>(
    ids: &[String],
    scores: &mut ScoreManager<S>,
) -> Result<(Vec<String>, Vec<String>)>
where
    S: KeyValueStore,
    S::Error: Display,
{
    let mut deleted = Vec::new();
    let mut missing = Vec::new();

    for id in ids {
        if scores.try_delete_score(id)? {
            deleted.push(id.clone());
        } else {
            missing.push(id.clone());
        }
    }

    Ok((deleted, missing))
}
