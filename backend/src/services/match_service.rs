//! Match Store orchestration (C1): validates a reported or edited match
//! against its series, persists it, then drives the write-path recompute
//! hook synchronously before telling the caller the write succeeded.

use crate::error::{AppError, Result};
use crate::models::r#match::Match;
use crate::models::series::Series;
use crate::services::leaderboard_service::{LeaderboardService, RecomputeOutcome};
use crate::services::score_validator::validator_for;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct MatchService {
    pool: PgPool,
    leaderboard_service: Arc<LeaderboardService>,
}

impl MatchService {
    pub fn new(pool: PgPool, leaderboard_service: Arc<LeaderboardService>) -> Self {
        Self {
            pool,
            leaderboard_service,
        }
    }

    async fn validate(
        &self,
        series: &Series,
        player_a_id: Uuid,
        player_b_id: Uuid,
        score_a: i32,
        score_b: i32,
        played_at: DateTime<Utc>,
    ) -> Result<()> {
        if player_a_id == player_b_id {
            return Err(AppError::InvalidPlayers);
        }

        if !series.contains(played_at) {
            return Err(AppError::OutOfWindow);
        }

        validator_for(series).validate(series, score_a, score_b)?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_match(
        &self,
        series_id: Uuid,
        player_a_id: Uuid,
        player_b_id: Uuid,
        score_a: i32,
        score_b: i32,
        played_at: DateTime<Utc>,
    ) -> Result<(Uuid, RecomputeOutcome)> {
        let series = Series::find_by_id(&self.pool, series_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("series {series_id}")))?;

        self.validate(&series, player_a_id, player_b_id, score_a, score_b, played_at)
            .await?;

        let m = Match::create(
            &self.pool,
            series_id,
            player_a_id,
            player_b_id,
            score_a,
            score_b,
            played_at,
        )
        .await?;

        let outcome = self.leaderboard_service.recompute_on_write(series_id).await;

        Ok((m.id, outcome))
    }

    /// `new_fields` merges over the existing match tuple (§4.1's "merged
    /// tuple" contract): any field left `None` keeps its current value, and
    /// the merged result is what gets validated and persisted.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_match(
        &self,
        match_id: Uuid,
        player_a_id: Option<Uuid>,
        player_b_id: Option<Uuid>,
        score_a: Option<i32>,
        score_b: Option<i32>,
        played_at: Option<DateTime<Utc>>,
    ) -> Result<RecomputeOutcome> {
        let existing = Match::find_by_id(&self.pool, match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("match {match_id}")))?;

        let series = Series::find_by_id(&self.pool, existing.series_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("series {}", existing.series_id)))?;

        let player_a_id = player_a_id.unwrap_or(existing.player_a_id);
        let player_b_id = player_b_id.unwrap_or(existing.player_b_id);
        let score_a = score_a.unwrap_or(existing.score_a);
        let score_b = score_b.unwrap_or(existing.score_b);
        let played_at = played_at.unwrap_or(existing.played_at);

        self.validate(&series, player_a_id, player_b_id, score_a, score_b, played_at)
            .await?;

        Match::update(
            &self.pool,
            match_id,
            player_a_id,
            player_b_id,
            score_a,
            score_b,
            played_at,
        )
        .await?;

        let outcome = self
            .leaderboard_service
            .recompute_on_write(existing.series_id)
            .await;

        Ok(outcome)
    }

    /// Idempotent: deleting an absent match still succeeds and recomputes
    /// nothing (there is no series to key the recompute by).
    pub async fn delete_match(&self, match_id: Uuid) -> Result<Option<RecomputeOutcome>> {
        let existing = Match::find_by_id(&self.pool, match_id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        Match::delete(&self.pool, match_id).await?;

        let outcome = self
            .leaderboard_service
            .recompute_on_write(existing.series_id)
            .await;

        Ok(Some(outcome))
    }

    pub async fn list_by_series_chronological(&self, series_id: Uuid) -> Result<Vec<Match>> {
        Match::list_by_series_chronological(&self.pool, series_id).await
    }
}
