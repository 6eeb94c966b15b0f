//! Narrow collaborator the leaderboard service calls to resolve display
//! names. Kept as a trait so the ranking core never depends on `sqlx` types.

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Never fails for a missing player; the caller substitutes a placeholder.
    async fn display_name(&self, player_id: Uuid) -> Option<String>;
}

pub struct SqlPlayerDirectory {
    pool: sqlx::PgPool,
}

impl SqlPlayerDirectory {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerDirectory for SqlPlayerDirectory {
    async fn display_name(&self, player_id: Uuid) -> Option<String> {
        crate::models::player::Player::find_by_id(&self.pool, player_id)
            .await
            .ok()
            .flatten()
            .map(|p| p.display_name)
    }
}
