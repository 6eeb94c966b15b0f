mod common;

use chrono::{DateTime, Utc};
use common::{fixtures, setup};
use klubbspel_backend::error::AppError;
use klubbspel_backend::services::leaderboard_service::{LeaderboardService, RecomputeOutcome};
use klubbspel_backend::services::match_service::MatchService;
use klubbspel_backend::services::player_directory::SqlPlayerDirectory;
use std::sync::Arc;

fn t(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

async fn build_match_service(pool: &sqlx::PgPool) -> MatchService {
    let leaderboard_service = Arc::new(LeaderboardService::new(
        pool.clone(),
        Arc::new(SqlPlayerDirectory::new(pool.clone())),
    ));
    MatchService::new(pool.clone(), leaderboard_service)
}

#[tokio::test]
async fn reporting_a_match_triggers_recompute_and_is_visible_on_next_read() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Racket Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 2).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;
    let leaderboard_service = LeaderboardService::new(
        ctx.pool.clone(),
        Arc::new(SqlPlayerDirectory::new(ctx.pool.clone())),
    );

    let (match_id, outcome) = match_service
        .create_match(
            series.id,
            players[0].id,
            players[1].id,
            3,
            1,
            t("2026-02-01T12:00:00Z"),
        )
        .await
        .unwrap();

    assert!(matches!(outcome, RecomputeOutcome::Ok));
    assert!(klubbspel_backend::models::Match::find_by_id(&ctx.pool, match_id)
        .await
        .unwrap()
        .is_some());

    // Read-your-writes: the leaderboard already reflects the match that was
    // just reported, with no separate rebuild step required by the caller.
    let page = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();

    assert_eq!(page.total_players, 2);
    let winner = page.entries.iter().find(|e| e.player_id == players[0].id).unwrap();
    assert_eq!(winner.rank, 1);
    assert_eq!(winner.rating, 1016);
}

#[tokio::test]
async fn out_of_window_match_is_rejected_and_leaderboard_stays_empty() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Tennis Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 2).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;

    let result = match_service
        .create_match(
            series.id,
            players[0].id,
            players[1].id,
            3,
            1,
            t("2027-01-01T00:00:00Z"),
        )
        .await;

    assert!(matches!(result, Err(AppError::OutOfWindow)));

    let leaderboard_service = LeaderboardService::new(
        ctx.pool.clone(),
        Arc::new(SqlPlayerDirectory::new(ctx.pool.clone())),
    );
    let page = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();
    assert_eq!(page.total_players, 0);
    assert!(page.entries.is_empty());
}

#[tokio::test]
async fn editing_a_match_then_reverting_it_restores_the_original_leaderboard() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Padel Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 2).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;
    let leaderboard_service = LeaderboardService::new(
        ctx.pool.clone(),
        Arc::new(SqlPlayerDirectory::new(ctx.pool.clone())),
    );

    let (match_id, _) = match_service
        .create_match(
            series.id,
            players[0].id,
            players[1].id,
            3,
            1,
            t("2026-02-01T12:00:00Z"),
        )
        .await
        .unwrap();

    let before = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();

    // Only the losing side's score changes; players and time are left
    // untouched via `None`, exercising the merged-tuple partial-update path.
    match_service
        .update_match(match_id, None, None, None, Some(2), None)
        .await
        .unwrap();

    match_service
        .update_match(match_id, None, None, None, Some(1), None)
        .await
        .unwrap();

    let after = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();

    let ratings = |page: &klubbspel_backend::services::leaderboard_service::LeaderboardPage| {
        page.entries
            .iter()
            .map(|e| (e.player_id, e.rank, e.rating, e.matches_played))
            .collect::<Vec<_>>()
    };
    assert_eq!(ratings(&before), ratings(&after));
}

/// Passing `None` for a field leaves it at its current value; only the
/// fields actually given are merged into the persisted match.
#[tokio::test]
async fn edit_match_merges_only_the_provided_fields() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Merge Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 2).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;

    let (match_id, _) = match_service
        .create_match(
            series.id,
            players[0].id,
            players[1].id,
            3,
            1,
            t("2026-02-01T12:00:00Z"),
        )
        .await
        .unwrap();

    match_service
        .update_match(match_id, None, None, None, None, Some(t("2026-02-02T12:00:00Z")))
        .await
        .unwrap();

    let updated = klubbspel_backend::models::Match::find_by_id(&ctx.pool, match_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.player_a_id, players[0].id);
    assert_eq!(updated.player_b_id, players[1].id);
    assert_eq!(updated.score_a, 3);
    assert_eq!(updated.score_b, 1);
    assert_eq!(updated.played_at, t("2026-02-02T12:00:00Z"));
}

#[tokio::test]
async fn deleting_an_absent_match_is_an_idempotent_success() {
    let ctx = setup::setup_test_db().await;
    let match_service = build_match_service(&ctx.pool).await;

    let outcome = match_service.delete_match(uuid::Uuid::new_v4()).await.unwrap();
    assert!(outcome.is_none());
}
