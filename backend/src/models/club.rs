use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// The sentinel club id representing cross-club visible series. Seeded by
/// migration, never matched by name lookup.
pub const OPEN_CLUB_ID: Uuid = Uuid::nil();

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
}

impl Club {
    pub async fn create(pool: &PgPool, name: &str, password_hash: &str) -> Result<Self> {
        let club = sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (id, name, password_hash) VALUES (gen_random_uuid(), $1, $2)
             RETURNING id, name, password_hash",
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(club)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let club = sqlx::query_as::<_, Club>(
            "SELECT id, name, password_hash FROM clubs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(club)
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>> {
        let club = sqlx::query_as::<_, Club>(
            "SELECT id, name, password_hash FROM clubs WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(club)
    }
}
