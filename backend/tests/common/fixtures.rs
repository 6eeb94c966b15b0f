use chrono::{DateTime, Utc};
use klubbspel_backend::{
    auth::hash_password,
    error::Result,
    models::{Club, Match, Player, Series},
    models::series::{LadderRules, SeriesFormat, Sport},
};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a test club with a hashed password
pub async fn create_test_club(pool: &PgPool, name: &str, password: &str) -> Result<Club> {
    let password_hash = hash_password(password).expect("Failed to hash password");
    Club::create(pool, name, &password_hash).await
}

/// Create multiple test clubs
pub async fn create_test_clubs(pool: &PgPool, count: usize) -> Result<Vec<Club>> {
    let mut clubs = Vec::new();
    for i in 0..count {
        let club = create_test_club(
            pool,
            &format!("Test Club {}", i + 1),
            &format!("password{}", i + 1),
        )
        .await?;
        clubs.push(club);
    }
    Ok(clubs)
}

/// Create a test player
pub async fn create_test_player(pool: &PgPool, club_id: Uuid, name: &str) -> Result<Player> {
    Player::create(pool, club_id, name).await
}

/// Create multiple test players for a club
pub async fn create_test_players(pool: &PgPool, club_id: Uuid, count: usize) -> Result<Vec<Player>> {
    let mut players = Vec::new();
    for i in 0..count {
        let player = create_test_player(pool, club_id, &format!("Player {}", i + 1)).await?;
        players.push(player);
    }
    Ok(players)
}

/// Create a test open-play series spanning a wide enough window for fixture matches.
pub async fn create_test_open_play_series(
    pool: &PgPool,
    club_id: Uuid,
    sets_to_play: i32,
) -> Result<Series> {
    Series::create(
        pool,
        club_id,
        Sport::TableTennis,
        SeriesFormat::OpenPlay,
        LadderRules::Classic,
        sets_to_play,
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
        DateTime::parse_from_rfc3339("2026-12-31T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    )
    .await
}

/// Create a test ladder series with the given rule variant.
pub async fn create_test_ladder_series(
    pool: &PgPool,
    club_id: Uuid,
    ladder_rules: LadderRules,
) -> Result<Series> {
    Series::create(
        pool,
        club_id,
        Sport::TableTennis,
        SeriesFormat::Ladder,
        ladder_rules,
        5,
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
        DateTime::parse_from_rfc3339("2026-12-31T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    )
    .await
}

/// Create a test match at a given played_at timestamp.
#[allow(clippy::too_many_arguments)]
pub async fn create_test_match(
    pool: &PgPool,
    series_id: Uuid,
    player_a_id: Uuid,
    player_b_id: Uuid,
    score_a: i32,
    score_b: i32,
    played_at: DateTime<Utc>,
) -> Result<Match> {
    Match::create(
        pool,
        series_id,
        player_a_id,
        player_b_id,
        score_a,
        score_b,
        played_at,
    )
    .await
}
