use crate::models::Series;
use async_graphql::dataloader::Loader;
use async_graphql::FieldError;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct SeriesLoader {
    pool: PgPool,
}

impl SeriesLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for SeriesLoader {
    type Value = Series;
    type Error = Arc<FieldError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let series = sqlx::query_as::<_, Series>(
            "SELECT id, club_id, sport, format, ladder_rules, sets_to_play, starts_at, ends_at
             FROM series WHERE id = ANY($1)",
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Arc::new(FieldError::from(e.to_string())))?;

        Ok(series.into_iter().map(|s| (s.id, s)).collect())
    }
}
