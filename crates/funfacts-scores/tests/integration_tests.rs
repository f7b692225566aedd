//! Integration tests for the score manager

use chrono::{Duration, TimeZone, Utc};
use funfacts_domain::{GameScore, KeyValueStore};
use funfacts_scores::{ScoreConfig, ScoreManager};
use funfacts_store::{MemoryStore, SqliteStore};
use proptest::prelude::*;
use tempfile::TempDir;

/// Helper to build a score at a fixed offset from a base instant
fn score_at(correct: u32, total: u32, minutes: i64) -> GameScore {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    GameScore::from_tally(correct, total, base + Duration::minutes(minutes))
}

/// Helper to seed history directly in storage
fn seeded(history: &[GameScore]) -> ScoreManager<MemoryStore> {
    let mut store = MemoryStore::new();
    store
        .set("scoreHistory", &serde_json::to_string(history).unwrap())
        .unwrap();
    ScoreManager::with_defaults(store)
}

fn play(scores: &mut ScoreManager<MemoryStore>, correct: u32, total: u32) -> bool {
    scores.reset_current_score();
    scores.save_current_score(correct, total);
    scores.finalize_score().is_new_high_score
}

#[test]
fn test_first_session_two_of_three() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    scores.reset_current_score();
    scores.save_current_score(1, 1);
    scores.save_current_score(1, 2);
    scores.save_current_score(2, 3);

    let result = scores.finalize_score();
    assert!(result.is_new_high_score);
    assert_eq!(result.final_score.correct_count, 2);
    assert_eq!(result.final_score.total_count, 3);
    assert_eq!(result.final_score.percentage, 67);
    assert!((result.final_score.composite_score - 4.01).abs() < 1e-9);

    assert!(scores.get_current_score().is_none());
    assert_eq!(scores.get_all_scores().len(), 1);
}

#[test]
fn test_ranking_order() {
    let scores = seeded(&[
        score_at(3, 10, 0),
        score_at(5, 5, 1),
        score_at(4, 4, 2),
        score_at(8, 10, 3),
    ]);

    let ranked: Vec<(u32, u32)> = scores
        .get_all_scores()
        .iter()
        .map(|s| (s.correct_count, s.total_count))
        .collect();

    assert_eq!(ranked, vec![(8, 10), (5, 5), (4, 4), (3, 10)]);
}

#[test]
fn test_ties_prefer_most_recent() {
    let older = score_at(5, 5, 0);
    let newer = score_at(5, 5, 30);
    let scores = seeded(&[older.clone(), newer.clone()]);

    let all = scores.get_all_scores();
    assert_eq!(all[0].id, newer.id);
    assert_eq!(all[1].id, older.id);

    let highest = ScoreManager::<MemoryStore>::find_highest_score(&all).unwrap();
    assert_eq!(highest.id, newer.id);
}

#[test]
fn test_find_highest_on_empty() {
    assert!(ScoreManager::<MemoryStore>::find_highest_score(&[]).is_none());
}

#[test]
fn test_zero_correct_never_high_score() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    assert!(!play(&mut scores, 0, 4));
    assert_eq!(scores.get_all_scores().len(), 1);
}

#[test]
fn test_high_score_requires_strictly_better() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    assert!(play(&mut scores, 3, 3));
    assert!(!play(&mut scores, 3, 3));
    assert!(!play(&mut scores, 1, 3));
    assert!(play(&mut scores, 4, 5));
    assert_eq!(scores.get_all_scores().len(), 4);
}

#[test]
fn test_finalize_is_idempotent() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    scores.save_current_score(2, 2);
    assert!(scores.finalize_score().is_new_high_score);

    let second = scores.finalize_score();
    assert!(!second.is_new_high_score);
    assert_eq!(second.final_score.total_count, 0);
    assert_eq!(scores.get_all_scores().len(), 1);
}

#[test]
fn test_finalize_empty_session_leaves_history() {
    let mut scores = seeded(&[score_at(1, 2, 0)]);
    scores.save_current_score(0, 0);

    let result = scores.finalize_score();
    assert!(!result.is_new_high_score);
    assert_eq!(result.final_score.total_count, 0);
    assert_eq!(scores.get_all_scores().len(), 1);
}

#[test]
fn test_delete_score() {
    let keep = score_at(1, 1, 0);
    let removed = score_at(2, 2, 1);
    let mut scores = seeded(&[keep.clone(), removed.clone()]);

    scores.delete_score(&removed.id);
    let all = scores.get_all_scores();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);

    // Unknown id is a no-op
    scores.delete_score("score-does-not-exist");
    assert_eq!(scores.get_all_scores(), all);
}

#[test]
fn test_delete_unknown_id_keeps_history_intact() {
    let history = vec![score_at(3, 4, 0), score_at(1, 1, 1), score_at(2, 5, 2)];
    let mut scores = seeded(&history);
    let before = scores.get_all_scores();

    assert!(!scores.try_delete_score("score-does-not-exist").unwrap());
    assert_eq!(scores.get_all_scores(), before);
}

#[test]
fn test_finalize_over_corrupt_history_starts_fresh() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    scores.store_mut().set("scoreHistory", "{not json").unwrap();
    scores.save_current_score(2, 3);

    let result = scores.finalize_score();
    assert_eq!(result.final_score.total_count, 3);
    assert!(result.is_new_high_score);
    assert!(scores.get_current_score().is_none());

    let all = scores.get_all_scores();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, result.final_score.id);
}

#[test]
fn test_failing_store_degrades_to_defaults() {
    let mut store = MemoryStore::new();
    store.set_failing(true);
    let mut scores = ScoreManager::with_defaults(store);

    scores.save_current_score(3, 4);
    scores.reset_current_score();
    scores.delete_score("anything");
    scores.clear_all_scores();

    assert!(scores.get_current_score().is_none());
    assert!(scores.get_all_scores().is_empty());

    let result = scores.finalize_score();
    assert!(!result.is_new_high_score);
    assert_eq!(result.final_score.total_count, 0);

    let stats = scores.get_score_stats(Some((2, 3)));
    assert!(stats.current_score.is_none());
    assert!(stats.highest_score.is_none());
    assert!(stats.all_scores.is_empty());
    assert!(!stats.is_new_high_score);

    assert!(scores.try_get_all_scores().is_err());
}

#[test]
fn test_live_score_spliced_into_stats() {
    let mut scores = seeded(&[score_at(5, 5, 0)]);

    let stats = scores.get_score_stats(Some((8, 10)));
    assert!(stats.is_new_high_score);

    let current = stats.current_score.clone().unwrap();
    assert_eq!(current.correct_count, 8);
    assert_eq!(stats.highest_score.as_ref().unwrap().id, current.id);
    assert_eq!(stats.all_scores.len(), 2);
    assert_eq!(stats.all_scores[0].id, current.id);

    // Display only: nothing written
    assert_eq!(scores.get_all_scores().len(), 1);
    assert!(scores.get_current_score().is_none());

    // Not spliced when it does not beat history
    let stats = scores.get_score_stats(Some((1, 10)));
    assert!(!stats.is_new_high_score);
    assert_eq!(stats.all_scores.len(), 1);
    assert_eq!(stats.highest_score.unwrap().correct_count, 5);

    scores.clear_all_scores();
    let stats = scores.get_score_stats(Some((1, 1)));
    assert!(stats.is_new_high_score);
}

#[test]
fn test_live_tally_without_answers_uses_stored_slot() {
    let mut scores = ScoreManager::with_defaults(MemoryStore::new());
    scores.save_current_score(2, 4);

    let stats = scores.get_score_stats(Some((0, 0)));
    let current = stats.current_score.unwrap();
    assert_eq!((current.correct_count, current.total_count), (2, 4));

    let stats = scores.get_score_stats(None);
    assert_eq!(stats.current_score.unwrap().total_count, 4);
}

#[test]
fn test_legacy_history_backfilled() {
    let mut store = MemoryStore::new();
    store
        .set(
            "scoreHistory",
            r#"[
                {"id": "score-1", "correct": 2, "total": 3, "percentage": 67,
                 "timestamp": "2024-01-01T10:00:00.000Z", "date": "Jan 1, 2024, 10:00 AM"},
                {"id": "score-2", "correct": 4, "total": 4, "percentage": 100,
                 "compositeScore": 8, "timestamp": "2024-01-02T10:00:00.000Z",
                 "date": "Jan 2, 2024, 10:00 AM"}
            ]"#,
        )
        .unwrap();
    let scores = ScoreManager::with_defaults(store);

    let all = scores.get_all_scores();
    assert_eq!(all[0].id, "score-2");
    assert_eq!(all[1].id, "score-1");
    assert!((all[1].composite_score - 4.01).abs() < 1e-9);
}

#[test]
fn test_custom_keys() {
    let config = ScoreConfig::namespaced("@FunFacts:");
    let mut scores = ScoreManager::new(MemoryStore::new(), config).unwrap();
    scores.save_current_score(1, 1);
    scores.finalize_score();

    assert!(scores.store().get("@FunFacts:scoreHistory").unwrap().is_some());
    assert!(scores.store().get("scoreHistory").unwrap().is_none());
}

#[test]
fn test_history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("funfacts.db");

    let id = {
        let mut scores = ScoreManager::with_defaults(SqliteStore::new(&path).unwrap());
        scores.save_current_score(3, 4);
        scores.finalize_score().final_score.id
    };

    let scores = ScoreManager::with_defaults(SqliteStore::new(&path).unwrap());
    let all = scores.get_all_scores();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].percentage, 75);
}

proptest! {
    #[test]
    fn prop_history_is_ranked(tallies in prop::collection::vec((0u32..20, 1u32..20), 1..12)) {
        let mut scores = ScoreManager::with_defaults(MemoryStore::new());
        for (correct, total) in &tallies {
            scores.save_current_score((*correct).min(*total), *total);
            scores.finalize_score();
        }

        let all = scores.get_all_scores();
        prop_assert_eq!(all.len(), tallies.len());
        for pair in all.windows(2) {
            prop_assert!(pair[0].composite_score >= pair[1].composite_score);
        }

        let highest = ScoreManager::<MemoryStore>::find_highest_score(&all).unwrap();
        prop_assert_eq!(&highest.id, &all[0].id);
    }
}
