//! Command implementations.

pub mod clear;
pub mod config;
pub mod delete;
pub mod fact;
pub mod scores;

pub use self::clear::execute_clear;
pub use self::config::execute_config;
pub use self::delete::execute_delete;
pub use self::fact::execute_fact;
pub use self::scores::execute_scores;

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin; anything but `y` declines.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    Ok(is_yes(&response))
}

fn is_yes(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
