use crate::models::Player;
use async_graphql::dataloader::Loader;
use async_graphql::FieldError;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct PlayerLoader {
    pool: PgPool,
}

impl PlayerLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for PlayerLoader {
    type Value = Player;
    type Error = Arc<FieldError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let players = Player::find_by_ids(&self.pool, keys)
            .await
            .map_err(|e| Arc::new(FieldError::from(e.to_string())))?;

        Ok(players.into_iter().map(|p| (p.id, p)).collect())
    }
}

pub struct PlayersByClubLoader {
    pool: PgPool,
}

impl PlayersByClubLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for PlayersByClubLoader {
    type Value = Vec<Player>;
    type Error = Arc<FieldError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let mut result: HashMap<Uuid, Vec<Player>> = keys.iter().map(|&k| (k, Vec::new())).collect();

        for &club_id in keys {
            let players = Player::find_by_club_id(&self.pool, club_id)
                .await
                .map_err(|e| Arc::new(FieldError::from(e.to_string())))?;
            result.insert(club_id, players);
        }

        Ok(result)
    }
}
