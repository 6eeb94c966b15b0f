use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "sport", rename_all = "snake_case")]
pub enum Sport {
    TableTennis,
    Tennis,
    Padel,
    Badminton,
    Squash,
    Pickleball,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "series_format", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesFormat {
    OpenPlay,
    Ladder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ladder_rules", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LadderRules {
    Classic,
    Aggressive,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Series {
    pub id: Uuid,
    pub club_id: Uuid,
    pub sport: Sport,
    pub format: SeriesFormat,
    pub ladder_rules: LadderRules,
    pub sets_to_play: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Series {
    /// `W` in the score-validator rules: the decisive set count.
    pub fn decisive_sets(&self) -> i32 {
        (self.sets_to_play + 1) / 2
    }

    pub fn contains(&self, played_at: DateTime<Utc>) -> bool {
        played_at >= self.starts_at && played_at <= self.ends_at
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        club_id: Uuid,
        sport: Sport,
        format: SeriesFormat,
        ladder_rules: LadderRules,
        sets_to_play: i32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !(3..=7).contains(&sets_to_play) || sets_to_play % 2 == 0 {
            return Err(AppError::InvalidInput(
                "sets_to_play must be an odd integer in [3, 7]".to_string(),
            ));
        }
        if starts_at >= ends_at {
            return Err(AppError::InvalidInput(
                "starts_at must be before ends_at".to_string(),
            ));
        }

        let series = sqlx::query_as::<_, Series>(
            "INSERT INTO series
                (id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at)
             VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7)
             RETURNING id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at",
        )
        .bind(club_id)
        .bind(sport)
        .bind(format)
        .bind(ladder_rules)
        .bind(sets_to_play)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_one(pool)
        .await?;

        Ok(series)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let series = sqlx::query_as::<_, Series>(
            "SELECT id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at
             FROM series WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(series)
    }

    /// Series owned by `club_id`, plus every `OPEN`-sentinel series (cross-club visible).
    pub async fn find_visible_to_club(pool: &PgPool, club_id: Uuid) -> Result<Vec<Self>> {
        let series = sqlx::query_as::<_, Series>(
            "SELECT id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at
             FROM series WHERE club_id = $1 OR club_id = $2 ORDER BY starts_at DESC",
        )
        .bind(club_id)
        .bind(crate::models::club::OPEN_CLUB_ID)
        .fetch_all(pool)
        .await?;

        Ok(series)
    }

    /// Widen the time window. Invariant: bounds may only widen, never narrow.
    pub async fn widen_window(
        pool: &PgPool,
        id: Uuid,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Self> {
        let series = sqlx::query_as::<_, Series>(
            "UPDATE series
             SET starts_at = LEAST(starts_at, $2), ends_at = GREATEST(ends_at, $3)
             WHERE id = $1
             RETURNING id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at",
        )
        .bind(id)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("series {id}")))?;

        Ok(series)
    }
}
