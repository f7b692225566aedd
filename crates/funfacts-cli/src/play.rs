//! Interactive play loop.
//!
//! [`PlayLoop`] owns one [`GameSession`] and turns player input into
//! session moves, score writes and printable lines. [`run_play`] drives it
//! from a line editor.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use funfacts_domain::{GameSession, KeyValueStore, SessionError};
use funfacts_scores::ScoreManager;
use funfacts_source::FactSource;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    /// Guess for the fact on screen
    Answer(bool),
    /// Step back through earlier facts
    Previous,
    /// Step forward through earlier facts
    Next,
    /// Jump to the newest fact
    Latest,
    /// Show the score screen
    Score,
    /// Show the command list
    Help,
    /// End the session
    Quit,
}

/// Parse a line of play input.
pub fn parse_play_input(line: &str) -> Result<PlayInput> {
    match line.trim().to_lowercase().as_str() {
        "t" | "true" | "y" | "yes" => Ok(PlayInput::Answer(true)),
        "f" | "false" | "n" | "no" => Ok(PlayInput::Answer(false)),
        "b" | "back" | "prev" | "previous" => Ok(PlayInput::Previous),
        "next" => Ok(PlayInput::Next),
        "latest" | "l" => Ok(PlayInput::Latest),
        "score" | "scores" | "s" => Ok(PlayInput::Score),
        "help" | "?" => Ok(PlayInput::Help),
        "quit" | "exit" | "end" | "q" => Ok(PlayInput::Quit),
        "" => Err(CliError::InvalidInput("Empty input".to_string())),
        other => Err(CliError::InvalidInput(format!(
            "Unknown input: {}. Type 'help' for available commands.",
            other
        ))),
    }
}

/// Result of applying one input.
#[derive(Debug, Default)]
pub struct Turn {
    /// Lines to print, in order
    pub lines: Vec<String>,
    /// Whether the session should end now
    pub done: bool,
}

impl Turn {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// A play session wired to a fact source and a score manager.
pub struct PlayLoop<'a, S: KeyValueStore> {
    session: GameSession,
    source: FactSource,
    scores: ScoreManager<S>,
    formatter: &'a Formatter,
    rounds: Option<u32>,
}

impl<'a, S> PlayLoop<'a, S>
where
    S: KeyValueStore,
    S::Error: Display,
{
    /// Create a loop; `rounds` ends the session after that many answers.
    pub fn new(
        source: FactSource,
        scores: ScoreManager<S>,
        formatter: &'a Formatter,
        rounds: Option<u32>,
    ) -> Self {
        Self {
            session: GameSession::new(),
            source,
            scores,
            formatter,
            rounds,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The score manager, for inspection after the loop ends.
    pub fn scores(&self) -> &ScoreManager<S> {
        &self.scores
    }

    /// Clear any stale in-progress score and deal the first fact.
    pub async fn start(&mut self) -> Turn {
        self.scores.reset_current_score();

        let mut turn = Turn::default();
        self.deal(&mut turn).await;
        turn
    }

    /// Apply one input.
    pub async fn apply(&mut self, input: PlayInput) -> Turn {
        let mut turn = Turn::default();
        match input {
            PlayInput::Answer(guess) => self.answer(guess, &mut turn).await,
            PlayInput::Previous => {
                if self.session.previous() {
                    self.show_current(&mut turn);
                } else {
                    turn.push(self.formatter.warning("Already at the first fact"));
                }
            }
            PlayInput::Next => {
                if self.session.next() {
                    self.show_current(&mut turn);
                } else {
                    turn.push(self.formatter.warning("Already at the newest fact"));
                }
            }
            PlayInput::Latest => {
                self.session.latest();
                self.show_current(&mut turn);
            }
            PlayInput::Score => {
                let stats = self.scores.get_score_stats(Some(self.session.tally()));
                match self.formatter.format_stats(&stats, Some(10)) {
                    Ok(text) => turn.push(text),
                    Err(e) => turn.push(self.formatter.error(&e.to_string())),
                }
            }
            PlayInput::Help => turn.lines.extend(help_lines(self.formatter)),
            PlayInput::Quit => turn.done = true,
        }
        turn
    }

    /// Finalize the session and append its score to history.
    pub fn finish(&mut self) -> String {
        self.session.finalize();
        let result = self.scores.finalize_score();
        tracing::debug!(
            facts = self.session.history().len(),
            stats = %self.source.stats().summary(),
            "Session finalized"
        );
        self.formatter.final_score(&result)
    }

    async fn answer(&mut self, guess: bool, turn: &mut Turn) {
        match self.session.answer_current(guess) {
            Ok(_) => {}
            Err(e @ SessionError::AlreadyAnswered(_)) => {
                tracing::debug!("{}", e);
                turn.push(self.formatter.warning("You already answered this one"));
                return;
            }
            Err(e) => {
                turn.push(self.formatter.error(&e.to_string()));
                return;
            }
        }

        if let Some(fact) = self.session.current() {
            turn.push(self.formatter.verdict(fact));
        }

        let (correct, total) = self.session.tally();
        self.scores.save_current_score(correct, total);
        turn.push(self.formatter.info(&format!(
            "Score: {}",
            self.formatter.tally(correct, total)
        )));

        let stats = self.scores.get_score_stats(Some((correct, total)));
        if stats.is_new_high_score && self.session.take_high_score_announcement() {
            turn.push(self.formatter.success("New high score!"));
        }

        if self.rounds.is_some_and(|rounds| total >= rounds) {
            turn.done = true;
            return;
        }

        if !self.session.is_viewing_history() {
            turn.push(String::new());
            self.deal(turn).await;
        }
    }

    async fn deal(&mut self, turn: &mut Turn) {
        let fact = self.source.next_fact().await;
        if let Err(e) = self.session.push_fact(fact) {
            turn.push(self.formatter.error(&e.to_string()));
            return;
        }
        self.show_current(turn);
    }

    fn show_current(&self, turn: &mut Turn) {
        if let Some(fact) = self.session.current() {
            turn.push(self.formatter.fact_prompt(fact, self.session.position()));
            if fact.is_answered {
                turn.push(self.formatter.verdict(fact));
            }
        }
    }
}

/// Run an interactive session until the player quits or the rounds run out.
pub async fn run_play<S>(
    source: FactSource,
    scores: ScoreManager<S>,
    config: &Config,
    formatter: &Formatter,
    rounds: Option<u32>,
) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
{
    println!(
        "{}",
        formatter.info("FunFacts - answer t(rue) or f(alse). Type 'help' for commands, 'quit' to end.")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = Config::history_path()?;
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = editor.load_history(&history_path);

    let mut game = PlayLoop::new(source, scores, formatter, rounds);
    print_turn(&game.start().await);

    loop {
        match editor.readline("true/false> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                match parse_play_input(line) {
                    Ok(input) => {
                        let turn = game.apply(input).await;
                        print_turn(&turn);
                        if turn.done {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'quit' to end the session"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    println!();
    println!("{}", game.finish());

    editor.save_history(&history_path).ok();

    Ok(())
}

fn print_turn(turn: &Turn) {
    for line in &turn.lines {
        println!("{}", line);
    }
}

fn help_lines(formatter: &Formatter) -> Vec<String> {
    vec![
        formatter.info("Available commands:"),
        String::new(),
        "  t, true                  - The statement is true".to_string(),
        "  f, false                 - The statement is false".to_string(),
        "  back, prev               - Show the previous fact".to_string(),
        "  next                     - Show the next fact".to_string(),
        "  latest                   - Jump to the newest fact".to_string(),
        "  score                    - Show scores and the best score".to_string(),
        "  help, ?                  - Show this help".to_string(),
        "  quit, end                - End the session and save the score".to_string(),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use funfacts_domain::SessionState;
    use funfacts_source::FactSourceConfig;
    use funfacts_store::MemoryStore;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    fn offline_source() -> FactSource {
        FactSource::from_config(FactSourceConfig::offline()).unwrap()
    }

    #[test]
    fn test_parse_answers() {
        assert_eq!(parse_play_input("t").unwrap(), PlayInput::Answer(true));
        assert_eq!(parse_play_input(" TRUE ").unwrap(), PlayInput::Answer(true));
        assert_eq!(parse_play_input("f").unwrap(), PlayInput::Answer(false));
        assert_eq!(parse_play_input("No").unwrap(), PlayInput::Answer(false));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_play_input("back").unwrap(), PlayInput::Previous);
        assert_eq!(parse_play_input("next").unwrap(), PlayInput::Next);
        assert_eq!(parse_play_input("latest").unwrap(), PlayInput::Latest);
        assert_eq!(parse_play_input("end").unwrap(), PlayInput::Quit);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            parse_play_input("maybe"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(parse_play_input("   ").is_err());
    }

    #[tokio::test]
    async fn test_start_clears_stale_current_score() {
        let mut scores = ScoreManager::with_defaults(MemoryStore::new());
        scores.save_current_score(3, 4);

        let formatter = formatter();
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, None);
        let turn = game.start().await;

        assert_eq!(turn.lines.len(), 1);
        assert!(turn.lines[0].starts_with("[1/1]"));
        assert!(game.scores().get_current_score().is_none());
        assert_eq!(game.session().state(), SessionState::InProgress);
    }

    #[tokio::test]
    async fn test_answer_saves_tally_and_deals_next() {
        let formatter = formatter();
        let scores = ScoreManager::with_defaults(MemoryStore::new());
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, None);
        game.start().await;

        let truth = game.session().current().unwrap().truth_value;
        let turn = game.apply(PlayInput::Answer(truth)).await;

        assert!(!turn.done);
        assert!(turn.lines[0].starts_with("✓ Correct!"));
        assert!(turn.lines.iter().any(|l| l.contains("Score: 1/1 (100%)")));
        assert_eq!(
            turn.lines.iter().filter(|l| l.contains("New high score")).count(),
            1
        );
        assert_eq!(game.session().history().len(), 2);

        let current = game.scores().get_current_score().unwrap();
        assert_eq!((current.correct_count, current.total_count), (1, 1));
    }

    #[tokio::test]
    async fn test_high_score_announced_once() {
        let formatter = formatter();
        let scores = ScoreManager::with_defaults(MemoryStore::new());
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, None);
        game.start().await;

        let mut announcements = 0;
        for _ in 0..3 {
            let truth = game.session().current().unwrap().truth_value;
            let turn = game.apply(PlayInput::Answer(truth)).await;
            announcements += turn
                .lines
                .iter()
                .filter(|l| l.contains("New high score"))
                .count();
        }
        assert_eq!(announcements, 1);
    }

    #[tokio::test]
    async fn test_answering_history_is_rejected() {
        let formatter = formatter();
        let scores = ScoreManager::with_defaults(MemoryStore::new());
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, None);
        game.start().await;
        game.apply(PlayInput::Answer(true)).await;

        let back = game.apply(PlayInput::Previous).await;
        assert!(back.lines[0].starts_with("[1/2]"));
        assert!(game.session().is_viewing_history());

        let again = game.apply(PlayInput::Answer(true)).await;
        assert_eq!(again.lines, vec!["⚠ You already answered this one"]);
        assert_eq!(game.session().tally().1, 1);

        let first = game.apply(PlayInput::Previous).await;
        assert!(first.lines[0].contains("Already at the first fact"));

        let latest = game.apply(PlayInput::Latest).await;
        assert!(latest.lines[0].starts_with("[2/2]"));
    }

    #[tokio::test]
    async fn test_rounds_end_session_and_finalize() {
        let formatter = formatter();
        let scores = ScoreManager::with_defaults(MemoryStore::new());
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, Some(2));
        game.start().await;

        let first = game.apply(PlayInput::Answer(true)).await;
        assert!(!first.done);
        let second = game.apply(PlayInput::Answer(false)).await;
        assert!(second.done);

        let summary = game.finish();
        assert!(summary.starts_with("✓ Final score:"));
        assert_eq!(game.session().state(), SessionState::Finalized);
        assert_eq!(game.scores().get_all_scores().len(), 1);
        assert!(game.scores().get_current_score().is_none());
    }

    #[tokio::test]
    async fn test_quit_without_answers_saves_nothing() {
        let formatter = formatter();
        let scores = ScoreManager::with_defaults(MemoryStore::new());
        let mut game = PlayLoop::new(offline_source(), scores, &formatter, None);
        game.start().await;

        assert!(game.apply(PlayInput::Quit).await.done);
        assert!(game.finish().contains("nothing saved"));
        assert!(game.scores().get_all_scores().is_empty());
    }
}
