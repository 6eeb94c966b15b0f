use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlx::error::DatabaseError;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeaderboardRow {
    pub series_id: Uuid,
    pub player_id: Uuid,
    pub rank: i32,
    pub rating: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub updated_at: DateTime<Utc>,
}

/// A computed row, prior to being stamped with `updated_at` and persisted.
/// This is the shape the Elo and Ladder engines produce.
#[derive(Debug, Clone)]
pub struct ComputedRow {
    pub player_id: Uuid,
    pub rank: i32,
    pub rating: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub games_won: i32,
    pub games_lost: i32,
}

impl LeaderboardRow {
    pub async fn read_ordered(pool: &PgPool, series_id: Uuid) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            "SELECT series_id, player_id, rank, rating, matches_played, matches_won,
                    matches_lost, games_won, games_lost, updated_at
             FROM leaderboard_rows
             WHERE series_id = $1
             ORDER BY rank",
        )
        .bind(series_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Atomic per `series_id`: deletes the old row set and inserts the new one inside a
    /// single transaction, so no reader ever observes a mix of old and new rows.
    ///
    /// Rejects a row set whose ranks aren't a dense `1..N` permutation before
    /// touching the database — a violation is always a bug in the caller's
    /// recompute, never a legitimate state, and must surface as `Internal`.
    pub async fn replace_all(pool: &PgPool, series_id: Uuid, rows: &[ComputedRow]) -> Result<()> {
        validate_dense_rank_permutation(series_id, rows)?;

        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM leaderboard_rows WHERE series_id = $1")
            .bind(series_id)
            .execute(&mut *tx)
            .await?;

        if !rows.is_empty() {
            let now = Utc::now();
            let series_ids = vec![series_id; rows.len()];
            let player_ids: Vec<Uuid> = rows.iter().map(|r| r.player_id).collect();
            let ranks: Vec<i32> = rows.iter().map(|r| r.rank).collect();
            let ratings: Vec<i32> = rows.iter().map(|r| r.rating).collect();
            let matches_played: Vec<i32> = rows.iter().map(|r| r.matches_played).collect();
            let matches_won: Vec<i32> = rows.iter().map(|r| r.matches_won).collect();
            let matches_lost: Vec<i32> = rows.iter().map(|r| r.matches_lost).collect();
            let games_won: Vec<i32> = rows.iter().map(|r| r.games_won).collect();
            let games_lost: Vec<i32> = rows.iter().map(|r| r.games_lost).collect();
            let updated_ats = vec![now; rows.len()];

            sqlx::query(
                "INSERT INTO leaderboard_rows
                    (series_id, player_id, rank, rating, matches_played, matches_won,
                     matches_lost, games_won, games_lost, updated_at)
                 SELECT * FROM UNNEST(
                     $1::uuid[], $2::uuid[], $3::int[], $4::int[], $5::int[],
                     $6::int[], $7::int[], $8::int[], $9::int[], $10::timestamptz[]
                 )",
            )
            .bind(&series_ids)
            .bind(&player_ids)
            .bind(&ranks)
            .bind(&ratings)
            .bind(&matches_played)
            .bind(&matches_won)
            .bind(&matches_lost)
            .bind(&games_won)
            .bind(&games_lost)
            .bind(&updated_ats)
            .execute(&mut *tx)
            .await
            .map_err(constraint_violation_as_internal)?;
        }

        tx.commit().await?;

        Ok(())
    }
}

/// `series_id`/`player_id` uniqueness and dense `1..N` rank permutation,
/// checked application-side so a bug in an engine fails loudly instead of
/// silently corrupting the leaderboard.
fn validate_dense_rank_permutation(series_id: Uuid, rows: &[ComputedRow]) -> Result<()> {
    let mut seen_players = HashSet::with_capacity(rows.len());
    let mut ranks: Vec<i32> = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen_players.insert(row.player_id) {
            return Err(AppError::Internal(format!(
                "series {series_id}: duplicate player {} in computed leaderboard rows",
                row.player_id
            )));
        }
        ranks.push(row.rank);
    }

    ranks.sort_unstable();
    let expected: Vec<i32> = (1..=rows.len() as i32).collect();
    if ranks != expected {
        return Err(AppError::Internal(format!(
            "series {series_id}: computed ranks {ranks:?} are not a dense 1..{} permutation",
            rows.len()
        )));
    }

    Ok(())
}

/// The `leaderboard_rows` unique index on `(series_id, rank)` and primary key
/// on `(series_id, player_id)` are a backstop for the same invariant
/// `validate_dense_rank_permutation` already checks; if one ever fires it
/// means that check has a bug, so it must not be silently swallowed as a
/// generic database error.
fn constraint_violation_as_internal(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() || db_err.is_check_violation() {
            return AppError::Internal(format!("leaderboard_rows constraint violation: {db_err}"));
        }
    }
    AppError::from(err)
}
