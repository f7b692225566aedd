//! Game scores - the persisted result of a play session

use crate::scoring::{compute_composite_score, compute_percentage};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Display format used for `GameScore::display_date`, e.g. "Oct 19, 2026, 03:04 PM"
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// One session's result
///
/// Serialized with the field names the score history has always used on disk
/// (`correct`, `total`, `compositeScore`, `date`). The longer names are
/// accepted as aliases when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScore {
    /// Unique identifier, `score-<uuid>` for new records
    pub id: String,

    /// Correct answers
    #[serde(rename = "correct", alias = "correctCount")]
    pub correct_count: u32,

    /// Answers given
    #[serde(rename = "total", alias = "totalCount")]
    pub total_count: u32,

    /// Rounded accuracy, 0..=100
    pub percentage: u32,

    /// Accuracy-and-volume score used for ranking
    #[serde(rename = "compositeScore")]
    pub composite_score: f64,

    /// Creation instant
    pub timestamp: DateTime<Utc>,

    /// Human-readable creation time in local time
    #[serde(rename = "date", alias = "displayDate")]
    pub display_date: String,
}

impl GameScore {
    /// Build a score for a tally at the given instant
    ///
    /// `correct` is expected not to exceed `total`; callers clamp first.
    pub fn from_tally(correct: u32, total: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("score-{}", uuid::Uuid::now_v7()),
            correct_count: correct,
            total_count: total,
            percentage: compute_percentage(correct, total),
            composite_score: compute_composite_score(correct, total),
            timestamp,
            display_date: format_display_date(timestamp),
        }
    }

    /// Build a score for a tally timestamped now
    pub fn now(correct: u32, total: u32) -> Self {
        Self::from_tally(correct, total, Utc::now())
    }

    /// The empty score reported when a session had no answers
    pub fn zero() -> Self {
        Self::now(0, 0)
    }
}

/// Render a timestamp the way the score list shows it
pub fn format_display_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DISPLAY_DATE_FORMAT)
        .to_string()
}

/// A score record as found in storage
///
/// Records written before the composite score existed lack `compositeScore`
/// (and sometimes `percentage`/`date`). [`StoredScore::normalize`] fills those
/// in from the stored tally so the rest of the system only sees complete
/// [`GameScore`]s.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredScore {
    id: String,
    #[serde(alias = "correctCount")]
    correct: u32,
    #[serde(alias = "totalCount")]
    total: u32,
    #[serde(default)]
    percentage: Option<u32>,
    #[serde(rename = "compositeScore", default)]
    composite_score: Option<f64>,
    timestamp: DateTime<Utc>,
    #[serde(alias = "displayDate", default)]
    date: Option<String>,
}

impl StoredScore {
    /// Whether this record predates the composite score
    pub fn is_legacy(&self) -> bool {
        self.composite_score.is_none()
    }

    /// Back-fill derived fields and produce a complete score
    pub fn normalize(self) -> GameScore {
        GameScore {
            percentage: self
                .percentage
                .unwrap_or_else(|| compute_percentage(self.correct, self.total)),
            composite_score: self
                .composite_score
                .unwrap_or_else(|| compute_composite_score(self.correct, self.total)),
            display_date: self
                .date
                .unwrap_or_else(|| format_display_date(self.timestamp)),
            id: self.id,
            correct_count: self.correct,
            total_count: self.total,
            timestamp: self.timestamp,
        }
    }
}

/// Outcome of finalizing a session
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedScore {
    /// Whether the finalized score beat every earlier one
    pub is_new_high_score: bool,
    /// The score that was appended to history (or a zero score)
    pub final_score: GameScore,
}

/// Everything the score screen needs in one read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreStats {
    /// The live or persisted in-progress score
    pub current_score: Option<GameScore>,
    /// Best score, counting the current one if it beats history
    pub highest_score: Option<GameScore>,
    /// Ranked history, with the current score spliced in when it is a new best
    pub all_scores: Vec<GameScore>,
    /// Whether the current score beats history
    pub is_new_high_score: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_tally_derives_fields() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap();
        let score = GameScore::from_tally(2, 3, ts);

        assert!(score.id.starts_with("score-"));
        assert_eq!(score.percentage, 67);
        assert!((score.composite_score - 4.01).abs() < 1e-9);
        assert_eq!(score.timestamp, ts);
        assert!(score.display_date.contains("2025"));
    }

    #[test]
    fn test_serialized_field_names() {
        let score = GameScore::now(3, 4);
        let json = serde_json::to_value(&score).unwrap();

        assert_eq!(json["correct"], 3);
        assert_eq!(json["total"], 4);
        assert_eq!(json["percentage"], 75);
        assert!(json.get("compositeScore").is_some());
        assert!(json.get("date").is_some());
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_legacy_record_is_backfilled() {
        let raw = r#"{
            "id": "score-1700000000000-0.42",
            "correct": 2,
            "total": 3,
            "percentage": 67,
            "timestamp": "2023-11-14T22:13:20.000Z",
            "date": "Nov 14, 2023, 10:13 PM"
        }"#;

        let stored: StoredScore = serde_json::from_str(raw).unwrap();
        assert!(stored.is_legacy());

        let score = stored.normalize();
        assert_eq!(score.id, "score-1700000000000-0.42");
        assert!((score.composite_score - 4.01).abs() < 1e-9);
        assert_eq!(score.display_date, "Nov 14, 2023, 10:13 PM");
    }

    #[test]
    fn test_stored_composite_is_kept() {
        let raw = r#"{
            "id": "score-a",
            "correct": 1,
            "total": 2,
            "percentage": 50,
            "compositeScore": 2.0,
            "timestamp": "2024-01-01T00:00:00Z",
            "date": "Jan 1, 2024, 12:00 AM"
        }"#;

        let stored: StoredScore = serde_json::from_str(raw).unwrap();
        assert!(!stored.is_legacy());
        assert_eq!(stored.normalize().composite_score, 2.0);
    }

    #[test]
    fn test_long_field_aliases() {
        let raw = r#"{
            "id": "score-b",
            "correctCount": 4,
            "totalCount": 4,
            "timestamp": "2024-01-01T00:00:00Z",
            "displayDate": "whenever"
        }"#;

        let score = serde_json::from_str::<StoredScore>(raw).unwrap().normalize();
        assert_eq!(score.correct_count, 4);
        assert_eq!(score.percentage, 100);
        assert_eq!(score.composite_score, 8.0);
        assert_eq!(score.display_date, "whenever");
    }
}
