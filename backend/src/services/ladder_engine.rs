//! Deterministic ladder recomputation from a chronologically ordered match
//! list, for the two rule variants (`CLASSIC`, `AGGRESSIVE`).
//!
//! A player's position is a 1-based rank (1 is the top). The first time a
//! player appears they are appended to the current bottom of the ladder, so
//! initial positions follow first-appearance order in the match log. Each
//! match after that is a pure transition of the position vector driven only
//! by which of the two players was ranked better going in and who won.

use crate::models::leaderboard_row::ComputedRow;
use crate::models::series::LadderRules;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct MatchOutcome {
    pub player_a_id: Uuid,
    pub player_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
}

#[derive(Debug, Clone, Copy, Default)]
struct PlayerStats {
    matches_played: i32,
    matches_won: i32,
    matches_lost: i32,
    games_won: i32,
    games_lost: i32,
}

struct Ladder {
    /// `order[i]` is the player occupying position `i + 1`.
    order: Vec<Uuid>,
    index: HashMap<Uuid, usize>,
}

impl Ladder {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn ensure_present(&mut self, player: Uuid) {
        if !self.index.contains_key(&player) {
            self.index.insert(player, self.order.len());
            self.order.push(player);
        }
    }

    fn position_of(&self, player: Uuid) -> usize {
        self.index[&player]
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .order
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i))
            .collect();
    }

    /// Moves the player at `worse_idx` up to `better_idx`, cascading everyone
    /// in between down by one slot.
    fn cascade_to_top(&mut self, better_idx: usize, worse_idx: usize) {
        let player = self.order.remove(worse_idx);
        self.order.insert(better_idx, player);
        self.rebuild_index();
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
        self.rebuild_index();
    }
}

pub fn compute(matches: &[MatchOutcome], rules: LadderRules) -> Vec<ComputedRow> {
    let mut ladder = Ladder::new();
    let mut stats: HashMap<Uuid, PlayerStats> = HashMap::new();

    for m in matches {
        ladder.ensure_present(m.player_a_id);
        ladder.ensure_present(m.player_b_id);
        stats.entry(m.player_a_id).or_default();
        stats.entry(m.player_b_id).or_default();

        let a_idx = ladder.position_of(m.player_a_id);
        let b_idx = ladder.position_of(m.player_b_id);
        let (better_id, worse_id, better_idx, worse_idx) = if a_idx < b_idx {
            (m.player_a_id, m.player_b_id, a_idx, b_idx)
        } else {
            (m.player_b_id, m.player_a_id, b_idx, a_idx)
        };

        let a_won = m.score_a > m.score_b;
        let winner_id = if a_won { m.player_a_id } else { m.player_b_id };

        if winner_id == worse_id {
            ladder.cascade_to_top(better_idx, worse_idx);
        } else {
            match rules {
                LadderRules::Classic => {}
                LadderRules::Aggressive => {
                    let next = worse_idx + 1;
                    if next < ladder.order.len() && ladder.order[next] != better_id {
                        ladder.swap(worse_idx, next);
                    }
                }
            }
        }

        let a = stats.get_mut(&m.player_a_id).unwrap();
        a.matches_played += 1;
        a.games_won += m.score_a;
        a.games_lost += m.score_b;
        if a_won {
            a.matches_won += 1;
        } else {
            a.matches_lost += 1;
        }

        let b = stats.get_mut(&m.player_b_id).unwrap();
        b.matches_played += 1;
        b.games_won += m.score_b;
        b.games_lost += m.score_a;
        if a_won {
            b.matches_lost += 1;
        } else {
            b.matches_won += 1;
        }
    }

    ladder
        .order
        .iter()
        .enumerate()
        .map(|(i, &player_id)| {
            let s = stats.get(&player_id).copied().unwrap_or_default();
            let position = (i + 1) as i32;
            ComputedRow {
                player_id,
                rank: position,
                rating: position,
                matches_played: s.matches_played,
                matches_won: s.matches_won,
                matches_lost: s.matches_lost,
                games_won: s.games_won,
                games_lost: s.games_lost,
            }
        })
        .collect()
}
