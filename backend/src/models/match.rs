use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Match {
    pub id: Uuid,
    pub series_id: Uuid,
    pub player_a_id: Uuid,
    pub player_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
    pub played_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        series_id: Uuid,
        player_a_id: Uuid,
        player_b_id: Uuid,
        score_a: i32,
        score_b: i32,
        played_at: DateTime<Utc>,
    ) -> Result<Self> {
        let m = sqlx::query_as::<_, Match>(
            "INSERT INTO matches
                (id, series_id, player_a_id, player_b_id, score_a, score_b, played_at, created_at)
             VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, now())
             RETURNING id, series_id, player_a_id, player_b_id, score_a, score_b, played_at, created_at",
        )
        .bind(series_id)
        .bind(player_a_id)
        .bind(player_b_id)
        .bind(score_a)
        .bind(score_b)
        .bind(played_at)
        .fetch_one(pool)
        .await?;

        Ok(m)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let m = sqlx::query_as::<_, Match>(
            "SELECT id, series_id, player_a_id, player_b_id, score_a, score_b, played_at, created_at
             FROM matches WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(m)
    }

    /// Edits preserve `id`, `series_id`, `created_at`; only the playing tuple changes.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        player_a_id: Uuid,
        player_b_id: Uuid,
        score_a: i32,
        score_b: i32,
        played_at: DateTime<Utc>,
    ) -> Result<Self> {
        let m = sqlx::query_as::<_, Match>(
            "UPDATE matches
             SET player_a_id = $2, player_b_id = $3, score_a = $4, score_b = $5, played_at = $6
             WHERE id = $1
             RETURNING id, series_id, player_a_id, player_b_id, score_a, score_b, played_at, created_at",
        )
        .bind(id)
        .bind(player_a_id)
        .bind(player_b_id)
        .bind(score_a)
        .bind(score_b)
        .bind(played_at)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("match {id}")))?;

        Ok(m)
    }

    /// Idempotent: deleting an absent match is a success.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Tie-broken total order: `(played_at, created_at, id)` ascending.
    pub async fn list_by_series_chronological(pool: &PgPool, series_id: Uuid) -> Result<Vec<Self>> {
        let matches = sqlx::query_as::<_, Match>(
            "SELECT id, series_id, player_a_id, player_b_id, score_a, score_b, played_at, created_at
             FROM matches
             WHERE series_id = $1
             ORDER BY played_at, created_at, id",
        )
        .bind(series_id)
        .fetch_all(pool)
        .await?;

        Ok(matches)
    }
}
