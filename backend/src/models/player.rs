use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Player {
    pub id: Uuid,
    pub club_id: Uuid,
    pub display_name: String,
}

impl Player {
    pub async fn create(pool: &PgPool, club_id: Uuid, display_name: &str) -> Result<Self> {
        let player = sqlx::query_as::<_, Player>(
            "INSERT INTO players (id, club_id, display_name) VALUES (gen_random_uuid(), $1, $2)
             RETURNING id, club_id, display_name",
        )
        .bind(club_id)
        .bind(display_name)
        .fetch_one(pool)
        .await?;

        Ok(player)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let player = sqlx::query_as::<_, Player>(
            "SELECT id, club_id, display_name FROM players WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(player)
    }

    pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Self>> {
        let players = sqlx::query_as::<_, Player>(
            "SELECT id, club_id, display_name FROM players WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(players)
    }

    pub async fn find_by_club_id(pool: &PgPool, club_id: Uuid) -> Result<Vec<Self>> {
        let players = sqlx::query_as::<_, Player>(
            "SELECT id, club_id, display_name FROM players WHERE club_id = $1 ORDER BY display_name",
        )
        .bind(club_id)
        .fetch_all(pool)
        .await?;

        Ok(players)
    }
}
