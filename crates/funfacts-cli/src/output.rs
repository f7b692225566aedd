//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use funfacts_domain::scoring::{compute_percentage, find_highest_score};
use funfacts_domain::{FinalizedScore, GameFact, GameScore, ScoreStats};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a fact as a question, with its position in the session.
    pub fn fact_prompt(&self, fact: &GameFact, position: Option<(usize, usize)>) -> String {
        let mut out = String::new();
        if let Some((at, of)) = position {
            out.push_str(&self.colorize(&format!("[{}/{}] ", at, of), "cyan"));
        }
        if let Some(category) = &fact.category {
            out.push_str(&self.colorize(&format!("({}) ", category), "magenta"));
        }
        out.push_str(&fact.text);
        out
    }

    /// Format the outcome of an answered fact.
    ///
    /// Unanswered facts reveal the truth value without judging a guess.
    pub fn verdict(&self, fact: &GameFact) -> String {
        let truth = if fact.truth_value { "TRUE" } else { "FALSE" };
        let mut lines = vec![match fact.was_guess_correct {
            Some(true) => self.success(&format!("Correct! This is {}.", truth)),
            Some(false) => self.error(&format!("Wrong. This is {}.", truth)),
            None => self.info(&format!("This is {}.", truth)),
        }];

        if let Some(explanation) = &fact.explanation {
            lines.push(format!("  {}", explanation));
        }
        if let Some(source) = &fact.source {
            lines.push(self.colorize(&format!("  Source: {}", source), "blue"));
        }
        lines.join("\n")
    }

    /// Format a list of facts.
    pub fn format_facts(&self, facts: &[GameFact], reveal: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(facts)?),
            OutputFormat::Quiet => Ok(facts
                .iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if facts.is_empty() {
                    return Ok(self.colorize("No facts found.", "yellow"));
                }
                let blocks: Vec<String> = facts
                    .iter()
                    .map(|fact| {
                        let prompt = self.fact_prompt(fact, None);
                        if reveal {
                            format!("{}\n{}", prompt, self.verdict(fact))
                        } else {
                            prompt
                        }
                    })
                    .collect();
                Ok(blocks.join("\n\n"))
            }
        }
    }

    /// Format ranked scores.
    pub fn format_scores(&self, scores: &[GameScore]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(scores)?),
            OutputFormat::Table => Ok(self.format_scores_table(scores)),
            OutputFormat::Quiet => Ok(scores
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_scores_table(&self, scores: &[GameScore]) -> String {
        if scores.is_empty() {
            return self.colorize("No scores yet. Play a round first!", "yellow");
        }

        let best = find_highest_score(scores).map(|s| s.id.as_str());

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Correct", "%", "Composite", "Date"]);

        for (rank, score) in scores.iter().enumerate() {
            let marker = if best == Some(score.id.as_str()) {
                "*"
            } else {
                ""
            };
            builder.push_record([
                format!("{}{}", rank + 1, marker),
                score.id.clone(),
                format!("{}/{}", score.correct_count, score.total_count),
                format!("{}%", score.percentage),
                format!("{:.2}", score.composite_score),
                score.display_date.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the score screen.
    pub fn format_stats(&self, stats: &ScoreStats, limit: Option<usize>) -> Result<String> {
        let shown = match limit {
            Some(n) => &stats.all_scores[..n.min(stats.all_scores.len())],
            None => &stats.all_scores[..],
        };

        if self.format != OutputFormat::Table {
            return self.format_scores(shown);
        }

        let mut lines = Vec::new();
        if let Some(best) = &stats.highest_score {
            lines.push(self.info(&format!(
                "Best: {}/{} ({}%), composite {:.2}",
                best.correct_count, best.total_count, best.percentage, best.composite_score
            )));
        }
        if let Some(current) = &stats.current_score {
            lines.push(self.info(&format!(
                "In progress: {}",
                self.tally(current.correct_count, current.total_count)
            )));
        }
        if stats.is_new_high_score {
            lines.push(self.success("The in-progress game is a new high score!"));
        }
        lines.push(self.format_scores_table(shown));
        Ok(lines.join("\n"))
    }

    /// Format a running tally.
    pub fn tally(&self, correct: u32, total: u32) -> String {
        format!(
            "{}/{} ({}%)",
            correct,
            total,
            compute_percentage(correct, total)
        )
    }

    /// Format the end-of-session summary.
    pub fn final_score(&self, result: &FinalizedScore) -> String {
        let score = &result.final_score;
        if score.total_count == 0 {
            return self.info("No answers this session, nothing saved.");
        }

        let mut lines = vec![self.success(&format!(
            "Final score: {}, composite {:.2}",
            self.tally(score.correct_count, score.total_count),
            score.composite_score
        ))];
        if result.is_new_high_score {
            lines.push(self.colorize("New high score!", "magenta"));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
