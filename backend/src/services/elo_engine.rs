//! Deterministic Elo recomputation from a chronologically ordered match list.
//!
//! Every player starts at `R0 = 1000` the first time they appear. Ratings are
//! updated with the standard logistic expectation and a fixed K-factor,
//! rounded to the nearest integer (half-away-from-zero) after each match —
//! rounding happens once per match, not accumulated in floating point across
//! the whole series, so replaying the same match log always reproduces the
//! same ratings bit-for-bit regardless of host or build.
//!
//! ```
//! use klubbspel_backend::services::elo_engine::{compute, MatchOutcome};
//! use uuid::Uuid;
//!
//! let a = Uuid::from_u128(1);
//! let b = Uuid::from_u128(2);
//! let rows = compute(&[MatchOutcome { player_a_id: a, player_b_id: b, score_a: 3, score_b: 1 }]);
//! assert_eq!(rows[0].player_id, a);
//! assert_eq!(rows[0].rating, 1016);
//! assert_eq!(rows[1].rating, 984);
//! ```

use crate::models::leaderboard_row::ComputedRow;
use std::collections::HashMap;
use uuid::Uuid;

pub const INITIAL_RATING: f64 = 1000.0;
pub const K_FACTOR: f64 = 32.0;

#[derive(Debug, Clone, Copy)]
pub struct MatchOutcome {
    pub player_a_id: Uuid,
    pub player_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
}

#[derive(Debug, Clone, Copy, Default)]
struct PlayerState {
    rating: f64,
    matches_played: i32,
    matches_won: i32,
    matches_lost: i32,
    games_won: i32,
    games_lost: i32,
}

/// Rounds half-away-from-zero. `f64::round` already rounds halves away from
/// zero, but is spelled out here because that behavior is the thing the
/// reproducibility contract depends on.
fn round_half_away_from_zero(x: f64) -> f64 {
    x.round()
}

pub fn compute(matches: &[MatchOutcome]) -> Vec<ComputedRow> {
    let mut players: HashMap<Uuid, PlayerState> = HashMap::new();

    for m in matches {
        let a_won = m.score_a > m.score_b;

        let a = players.entry(m.player_a_id).or_insert_with(|| PlayerState {
            rating: INITIAL_RATING,
            ..Default::default()
        });
        let r_a = a.rating;

        let b = players.entry(m.player_b_id).or_insert_with(|| PlayerState {
            rating: INITIAL_RATING,
            ..Default::default()
        });
        let r_b = b.rating;

        let e_a = 1.0 / (1.0 + 10f64.powf((r_b - r_a) / 400.0));
        let e_b = 1.0 - e_a;
        let (s_a, s_b) = if a_won { (1.0, 0.0) } else { (0.0, 1.0) };

        let new_r_a = round_half_away_from_zero(r_a + K_FACTOR * (s_a - e_a));
        let new_r_b = round_half_away_from_zero(r_b + K_FACTOR * (s_b - e_b));

        let a = players.get_mut(&m.player_a_id).unwrap();
        a.rating = new_r_a;
        a.matches_played += 1;
        a.games_won += m.score_a;
        a.games_lost += m.score_b;
        if a_won {
            a.matches_won += 1;
        } else {
            a.matches_lost += 1;
        }

        let b = players.get_mut(&m.player_b_id).unwrap();
        b.rating = new_r_b;
        b.matches_played += 1;
        b.games_won += m.score_b;
        b.games_lost += m.score_a;
        if a_won {
            b.matches_lost += 1;
        } else {
            b.matches_won += 1;
        }
    }

    let mut rows: Vec<(Uuid, PlayerState)> = players.into_iter().collect();

    // Descending rating, then more wins, then fewer losses, then ascending id.
    rows.sort_by(|(id_a, a), (id_b, b)| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap()
            .then_with(|| b.matches_won.cmp(&a.matches_won))
            .then_with(|| a.matches_lost.cmp(&b.matches_lost))
            .then_with(|| id_a.cmp(id_b))
    });

    rows.into_iter()
        .enumerate()
        .map(|(i, (player_id, s))| ComputedRow {
            player_id,
            rank: (i + 1) as i32,
            rating: s.rating as i32,
            matches_played: s.matches_played,
            matches_won: s.matches_won,
            matches_lost: s.matches_lost,
            games_won: s.games_won,
            games_lost: s.games_lost,
        })
        .collect()
}
