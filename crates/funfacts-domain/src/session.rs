//! Play session state
//!
//! A session moves `Reset -> InProgress -> Finalized`. It keeps every fact
//! served so the player can browse back and forth, and the running tally the
//! score manager persists after each answer. Persistence itself happens
//! outside this type.

use crate::fact::{AlreadyAnswered, FactId, GameFact};
use thiserror::Error;

/// Lifecycle stage of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Fresh session, nothing answered yet
    Reset,
    /// At least one fact has been served
    InProgress,
    /// Score handed off to history; no further answers accepted
    Finalized,
}

impl SessionState {
    /// Get the state name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Reset => "reset",
            SessionState::InProgress => "in_progress",
            SessionState::Finalized => "finalized",
        }
    }
}

/// Errors from session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No fact is currently shown
    #[error("no fact is being shown")]
    NoCurrentFact,
    /// The shown fact was answered before
    #[error("fact {0} has already been answered")]
    AlreadyAnswered(FactId),
    /// The session has been finalized
    #[error("session is finalized")]
    Finalized,
}

/// In-memory state of one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    history: Vec<GameFact>,
    cursor: Option<usize>,
    correct: u32,
    total: u32,
    high_score_announced: bool,
}

impl GameSession {
    /// Start a fresh session
    pub fn new() -> Self {
        Self {
            state: SessionState::Reset,
            history: Vec::new(),
            cursor: None,
            correct: 0,
            total: 0,
            high_score_announced: false,
        }
    }

    /// Current lifecycle stage
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Running tally as `(correct, total)`
    pub fn tally(&self) -> (u32, u32) {
        (self.correct, self.total)
    }

    /// Every fact served so far, oldest first
    pub fn history(&self) -> &[GameFact] {
        &self.history
    }

    /// The fact under the cursor
    pub fn current(&self) -> Option<&GameFact> {
        self.cursor.and_then(|i| self.history.get(i))
    }

    /// 1-based position of the cursor and the history length
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.map(|i| (i + 1, self.history.len()))
    }

    /// Whether the cursor is behind the newest fact
    pub fn is_viewing_history(&self) -> bool {
        match self.cursor {
            Some(i) => i + 1 < self.history.len(),
            None => false,
        }
    }

    /// Append a newly served fact and move the cursor to it
    pub fn push_fact(&mut self, fact: GameFact) -> Result<(), SessionError> {
        if self.state == SessionState::Finalized {
            return Err(SessionError::Finalized);
        }
        self.history.push(fact);
        self.cursor = Some(self.history.len() - 1);
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Answer the fact under the cursor and update the tally
    ///
    /// Returns whether the guess was correct.
    pub fn answer_current(&mut self, guess: bool) -> Result<bool, SessionError> {
        if self.state == SessionState::Finalized {
            return Err(SessionError::Finalized);
        }
        let index = self.cursor.ok_or(SessionError::NoCurrentFact)?;
        let fact = &mut self.history[index];
        let id = fact.id;
        let correct = fact
            .answer(guess)
            .map_err(|AlreadyAnswered| SessionError::AlreadyAnswered(id))?;

        self.total += 1;
        if correct {
            self.correct += 1;
        }
        Ok(correct)
    }

    /// Move the cursor one fact back; returns false at the start
    pub fn previous(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor one fact forward; returns false at the newest fact
    pub fn next(&mut self) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.history.len() => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Jump back to the newest fact
    pub fn latest(&mut self) {
        if !self.history.is_empty() {
            self.cursor = Some(self.history.len() - 1);
        }
    }

    /// Mark the session finalized; later answers are rejected
    pub fn finalize(&mut self) {
        self.state = SessionState::Finalized;
    }

    /// Returns true the first time it is called for this session
    ///
    /// Used to announce a new high score once rather than after every answer.
    pub fn take_high_score_announcement(&mut self) -> bool {
        !std::mem::replace(&mut self.high_score_announced, true)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(n: usize) -> GameSession {
        let mut session = GameSession::new();
        for i in 0..n {
            session
                .push_fact(GameFact::new(format!("fact {}", i), i % 2 == 0))
                .unwrap();
        }
        session
    }

    #[test]
    fn test_state_progression() {
        let mut session = GameSession::new();
        assert_eq!(session.state(), SessionState::Reset);
        assert!(session.current().is_none());

        session.push_fact(GameFact::new("a", true)).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);

        session.finalize();
        assert_eq!(session.state(), SessionState::Finalized);
        assert_eq!(session.answer_current(true), Err(SessionError::Finalized));
        assert_eq!(
            session.push_fact(GameFact::new("b", true)),
            Err(SessionError::Finalized)
        );
    }

    #[test]
    fn test_tally_two_of_three() {
        let mut session = GameSession::new();

        session.push_fact(GameFact::new("true one", true)).unwrap();
        assert_eq!(session.answer_current(true), Ok(true));

        session.push_fact(GameFact::new("false one", false)).unwrap();
        assert_eq!(session.answer_current(false), Ok(true));

        session.push_fact(GameFact::new("true two", true)).unwrap();
        assert_eq!(session.answer_current(false), Ok(false));

        assert_eq!(session.tally(), (2, 3));
    }

    #[test]
    fn test_double_answer_does_not_count() {
        let mut session = session_with(1);
        session.answer_current(true).unwrap();

        let id = session.current().unwrap().id;
        assert_eq!(
            session.answer_current(true),
            Err(SessionError::AlreadyAnswered(id))
        );
        assert_eq!(session.tally().1, 1);
    }

    #[test]
    fn test_error_messages() {
        let id = FactId::new();
        assert_eq!(
            SessionError::AlreadyAnswered(id).to_string(),
            format!("fact {} has already been answered", id)
        );
        assert_eq!(SessionError::NoCurrentFact.to_string(), "no fact is being shown");

        let err: Box<dyn std::error::Error> = Box::new(SessionError::Finalized);
        assert_eq!(err.to_string(), "session is finalized");
    }

    #[test]
    fn test_answer_without_fact() {
        let mut session = GameSession::new();
        assert_eq!(session.answer_current(true), Err(SessionError::NoCurrentFact));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = session_with(3);
        assert_eq!(session.position(), Some((3, 3)));
        assert!(!session.is_viewing_history());
        assert!(!session.next());

        assert!(session.previous());
        assert!(session.previous());
        assert!(!session.previous());
        assert_eq!(session.position(), Some((1, 3)));
        assert!(session.is_viewing_history());

        assert!(session.next());
        assert_eq!(session.position(), Some((2, 3)));

        session.latest();
        assert_eq!(session.position(), Some((3, 3)));
    }

    #[test]
    fn test_high_score_announced_once() {
        let mut session = GameSession::new();
        assert!(session.take_high_score_announcement());
        assert!(!session.take_high_score_announcement());
    }
}
