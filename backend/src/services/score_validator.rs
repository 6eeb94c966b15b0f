//! Sport- and format-aware predicate that a raw score tuple is a legal
//! completed match. Modeled as a capability (`ScoreValidator`) so a variant
//! per sport can be added without touching the ranking engines, which only
//! ever see "A won" / "B won" plus the two score integers.

use crate::error::{AppError, InvalidScoreReason, Result};
use crate::models::series::Series;

pub trait ScoreValidator {
    /// Validates `(score_a, score_b)` against `series`. On success, returns
    /// `true` if player A won (the scores can never tie once validated).
    fn validate(&self, series: &Series, score_a: i32, score_b: i32) -> Result<bool>;
}

/// The sets-to-`W` validator used uniformly across every sport tag today.
/// `series.sport` is accepted but does not currently change behavior.
pub struct SetsScoreValidator;

impl ScoreValidator for SetsScoreValidator {
    fn validate(&self, series: &Series, score_a: i32, score_b: i32) -> Result<bool> {
        if score_a < 0 || score_b < 0 {
            return Err(AppError::InvalidScore(InvalidScoreReason::Negative));
        }

        if score_a == score_b {
            return Err(AppError::InvalidScore(InvalidScoreReason::Tie));
        }

        let w = series.decisive_sets();

        if score_a > w || score_b > w {
            return Err(AppError::InvalidScore(
                InvalidScoreReason::ScoreExceedsDecisive,
            ));
        }

        let a_won = score_a == w;
        let b_won = score_b == w;

        if !a_won && !b_won {
            return Err(AppError::InvalidScore(
                InvalidScoreReason::NoWinnerReachedDecisive,
            ));
        }

        Ok(a_won)
    }
}

/// Resolves the validator capability for `series.sport`. One implementation
/// registered for every sport tag today; a per-sport table lives here when
/// sports diverge.
pub fn validator_for(_series: &Series) -> impl ScoreValidator {
    SetsScoreValidator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::{LadderRules, SeriesFormat, Sport};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn series_with(sets_to_play: i32) -> Series {
        Series {
            id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            sport: Sport::TableTennis,
            format: SeriesFormat::OpenPlay,
            ladder_rules: LadderRules::Classic,
            sets_to_play,
            starts_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn accepts_a_clean_win_for_a() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        assert_eq!(validator.validate(&series, 3, 1).unwrap(), true);
    }

    #[test]
    fn accepts_a_clean_win_for_b() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        assert_eq!(validator.validate(&series, 1, 3).unwrap(), false);
    }

    #[test]
    fn rejects_a_tie() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        let err = validator.validate(&series, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidScore(InvalidScoreReason::Tie)
        ));
    }

    #[test]
    fn rejects_neither_side_reaching_decisive() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        let err = validator.validate(&series, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidScore(InvalidScoreReason::NoWinnerReachedDecisive)
        ));
    }

    #[test]
    fn rejects_score_exceeding_decisive() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        let err = validator.validate(&series, 4, 1).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidScore(InvalidScoreReason::ScoreExceedsDecisive)
        ));
    }

    #[test]
    fn rejects_negative_scores() {
        let series = series_with(5);
        let validator = SetsScoreValidator;
        let err = validator.validate(&series, -1, 3).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidScore(InvalidScoreReason::Negative)
        ));
    }

    #[test]
    fn decisive_set_count_for_each_legal_length() {
        assert_eq!(series_with(3).decisive_sets(), 2);
        assert_eq!(series_with(5).decisive_sets(), 3);
        assert_eq!(series_with(7).decisive_sets(), 4);
    }
}
