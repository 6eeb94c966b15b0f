//! Orchestrates the score validator and the two ranking engines over one
//! series and atomically replaces its materialized leaderboard. The single
//! writer of leaderboard rows; never partially updates.

use crate::error::Result;
use crate::models::leaderboard_row::LeaderboardRow;
use crate::models::r#match::Match;
use crate::models::series::{Series, SeriesFormat};
use crate::services::{elo_engine, ladder_engine};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

#[instrument(skip(pool), fields(series_id = %series_id))]
pub async fn recompute(pool: &PgPool, series_id: Uuid) -> Result<()> {
    let Some(series) = Series::find_by_id(pool, series_id).await? else {
        return Err(crate::error::AppError::NotFound(format!(
            "series {series_id}"
        )));
    };

    let matches = Match::list_by_series_chronological(pool, series_id).await?;

    tracing::info!(match_count = matches.len(), "recomputing standings");

    if matches.is_empty() {
        LeaderboardRow::replace_all(pool, series_id, &[]).await?;
        return Ok(());
    }

    let rows = match series.format {
        SeriesFormat::OpenPlay => {
            let outcomes: Vec<elo_engine::MatchOutcome> = matches
                .iter()
                .map(|m| elo_engine::MatchOutcome {
                    player_a_id: m.player_a_id,
                    player_b_id: m.player_b_id,
                    score_a: m.score_a,
                    score_b: m.score_b,
                })
                .collect();
            elo_engine::compute(&outcomes)
        }
        SeriesFormat::Ladder => {
            let outcomes: Vec<ladder_engine::MatchOutcome> = matches
                .iter()
                .map(|m| ladder_engine::MatchOutcome {
                    player_a_id: m.player_a_id,
                    player_b_id: m.player_b_id,
                    score_a: m.score_a,
                    score_b: m.score_b,
                })
                .collect();
            ladder_engine::compute(&outcomes, series.ladder_rules)
        }
    };

    LeaderboardRow::replace_all(pool, series_id, &rows).await?;

    Ok(())
}
