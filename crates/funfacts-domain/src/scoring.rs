//! Score arithmetic and ranking
//!
//! The composite score rewards both accuracy and volume:
//!
//! ```text
//! percentage = round(correct / total * 100)
//! composite  = correct + percentage * total / 100
//! ```
//!
//! `percentage` is rounded *before* it is multiplied back out, so the
//! composite drifts slightly from `2 * correct` at non-round percentages
//! (2 of 3 gives 4.01, not 4.0). Stored histories depend on this exact
//! value, so the formula must not be simplified.

use crate::GameScore;
use std::cmp::Ordering;

/// Percentage of correct answers, rounded to the nearest integer
///
/// Returns 0 when nothing has been answered.
///
/// # Examples
///
/// ```
/// use funfacts_domain::scoring::compute_percentage;
///
/// assert_eq!(compute_percentage(2, 3), 67);
/// assert_eq!(compute_percentage(5, 0), 0);
/// ```
pub fn compute_percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Composite score combining accuracy and volume
///
/// # Examples
///
/// ```
/// use funfacts_domain::scoring::compute_composite_score;
///
/// assert_eq!(compute_composite_score(4, 4), 8.0);
/// assert_eq!(compute_composite_score(0, 0), 0.0);
/// assert!((compute_composite_score(2, 3) - 4.01).abs() < 1e-9);
/// ```
pub fn compute_composite_score(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = compute_percentage(correct, total);
    correct as f64 + (percentage as f64 * total as f64) / 100.0
}

/// Ranking order: composite descending, then most recent first
pub fn rank_order(a: &GameScore, b: &GameScore) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then_with(|| b.timestamp.cmp(&a.timestamp))
}

/// Sort scores into ranking order in place
pub fn sort_ranked(scores: &mut [GameScore]) {
    scores.sort_by(rank_order);
}

/// The best score by composite, ties going to the most recent
///
/// Returns `None` for an empty slice.
pub fn find_highest_score(scores: &[GameScore]) -> Option<&GameScore> {
    scores.iter().min_by(|a, b| rank_order(a, b))
}

/// Whether `candidate` beats the best of `history`
///
/// A score with zero correct answers never counts, even on an empty history.
pub fn is_new_high_score(candidate: &GameScore, history: &[GameScore]) -> bool {
    if candidate.correct_count == 0 {
        return false;
    }
    match find_highest_score(history) {
        Some(best) => candidate.composite_score > best.composite_score,
        None => true,
    }
}
