use crate::models::Match;
use async_graphql::dataloader::Loader;
use async_graphql::FieldError;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct MatchesBySeriesLoader {
    pool: PgPool,
}

impl MatchesBySeriesLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for MatchesBySeriesLoader {
    type Value = Vec<Match>;
    type Error = Arc<FieldError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let mut result: HashMap<Uuid, Vec<Match>> = keys.iter().map(|&k| (k, Vec::new())).collect();

        for &series_id in keys {
            let matches = Match::list_by_series_chronological(&self.pool, series_id)
                .await
                .map_err(|e| Arc::new(FieldError::from(e.to_string())))?;
            result.insert(series_id, matches);
        }

        Ok(result)
    }
}
