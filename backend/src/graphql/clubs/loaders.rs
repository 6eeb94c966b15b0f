use crate::models::Club;
use async_graphql::dataloader::Loader;
use async_graphql::FieldError;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct ClubLoader {
    pool: PgPool,
}

impl ClubLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ClubLoader {
    type Value = Club;
    type Error = Arc<FieldError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let clubs = sqlx::query_as::<_, Club>(
            "SELECT id, name, password_hash FROM clubs WHERE id = ANY($1)",
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Arc::new(FieldError::from(e.to_string())))?;

        Ok(clubs.into_iter().map(|c| (c.id, c)).collect())
    }
}
