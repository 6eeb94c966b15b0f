//! Read Mediator (C8): serves `GetLeaderboard`, and on a cache miss triggers
//! a rebuild and re-reads. Also the write-path hook: every successful match
//! mutation goes through `recompute_on_write`, which runs `Recompute`
//! synchronously before the writer is told the write succeeded, giving
//! read-your-writes without the read path ever needing a version check.

use crate::error::{AppError, Result};
use crate::models::leaderboard_row::LeaderboardRow;
use crate::services::build_guard::BuildGuard;
use crate::services::player_directory::PlayerDirectory;
use crate::services::standings;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

const UNKNOWN_PLAYER_PLACEHOLDER: &str = "Unknown player";

#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub player_id: Uuid,
    pub display_name: String,
    pub rank: i32,
    pub rating: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub games_won: i32,
    pub games_lost: i32,
}

#[derive(Debug, Clone)]
pub struct LeaderboardPage {
    pub entries: Vec<LeaderboardEntry>,
    pub next_cursor: Option<String>,
    pub total_players: i32,
}

/// Outcome of the write-path recompute hook. A warning never fails the write
/// that triggered it — the match is already durable by the time this runs.
pub enum RecomputeOutcome {
    Ok,
    Warning,
}

pub struct LeaderboardService {
    pool: PgPool,
    build_guard: BuildGuard,
    player_directory: Arc<dyn PlayerDirectory>,
}

impl LeaderboardService {
    pub fn new(pool: PgPool, player_directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            pool,
            build_guard: BuildGuard::new(),
            player_directory,
        }
    }

    /// Invoked after every successful `CreateMatch`/`UpdateMatch`/`DeleteMatch`.
    /// A transient failure here is logged at `warn!` and does not undo the
    /// write; the next read self-heals via the fallback-rebuild path.
    pub async fn recompute_on_write(&self, series_id: Uuid) -> RecomputeOutcome {
        match standings::recompute(&self.pool, series_id).await {
            Ok(()) => RecomputeOutcome::Ok,
            Err(AppError::NotFound(_)) => RecomputeOutcome::Ok,
            Err(err) => {
                tracing::warn!(series_id = %series_id, error = %err, "recompute-on-write failed, leaving cache as-is");
                RecomputeOutcome::Warning
            }
        }
    }

    pub async fn get_leaderboard(
        &self,
        series_id: Uuid,
        page_size: usize,
        page_cursor: Option<&str>,
    ) -> Result<LeaderboardPage> {
        let mut rows = LeaderboardRow::read_ordered(&self.pool, series_id).await?;

        if rows.is_empty() {
            rows = self.build_guard
                .with_guard(series_id, || async {
                    let rows = LeaderboardRow::read_ordered(&self.pool, series_id).await?;
                    if !rows.is_empty() {
                        return Ok(rows);
                    }

                    match standings::recompute(&self.pool, series_id).await {
                        Ok(()) => LeaderboardRow::read_ordered(&self.pool, series_id).await,
                        Err(AppError::NotFound(_)) => Ok(Vec::new()),
                        Err(err) => {
                            tracing::warn!(series_id = %series_id, error = %err, "fallback rebuild failed");
                            Ok(Vec::new())
                        }
                    }
                })
                .await?;
        }

        let total_players = rows.len() as i32;

        let start = match page_cursor {
            Some(cursor) => decode_cursor(series_id, cursor)?,
            None => 0,
        };

        let page: Vec<_> = rows.into_iter().skip(start).take(page_size).collect();
        let next_cursor = if start + page.len() < total_players as usize {
            page.last().map(|r| encode_cursor(series_id, r.rank))
        } else {
            None
        };

        let mut entries = Vec::with_capacity(page.len());
        for row in page {
            let display_name = self
                .player_directory
                .display_name(row.player_id)
                .await
                .unwrap_or_else(|| UNKNOWN_PLAYER_PLACEHOLDER.to_string());

            entries.push(LeaderboardEntry {
                player_id: row.player_id,
                display_name,
                rank: row.rank,
                rating: row.rating,
                matches_played: row.matches_played,
                matches_won: row.matches_won,
                matches_lost: row.matches_lost,
                games_won: row.games_won,
                games_lost: row.games_lost,
            });
        }

        Ok(LeaderboardPage {
            entries,
            next_cursor,
            total_players,
        })
    }
}

fn encode_cursor(series_id: Uuid, last_rank: i32) -> String {
    format!("{series_id}:{last_rank}")
}

/// Decodes `(series_id, last_rank)` and returns the number of rows to skip.
/// A cursor minted for a different series is rejected rather than silently
/// misinterpreted.
fn decode_cursor(series_id: Uuid, cursor: &str) -> Result<usize> {
    let (cursor_series, last_rank) = cursor
        .split_once(':')
        .ok_or_else(|| AppError::InvalidInput("malformed page cursor".to_string()))?;

    let cursor_series_id = Uuid::parse_str(cursor_series)
        .map_err(|_| AppError::InvalidInput("malformed page cursor".to_string()))?;

    if cursor_series_id != series_id {
        return Err(AppError::InvalidInput(
            "page cursor does not match series".to_string(),
        ));
    }

    let last_rank: i32 = last_rank
        .parse()
        .map_err(|_| AppError::InvalidInput("malformed page cursor".to_string()))?;

    Ok(last_rank.max(0) as usize)
}
