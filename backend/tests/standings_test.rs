mod common;

use chrono::{DateTime, Utc};
use common::{fixtures, setup};
use klubbspel_backend::models::series::LadderRules;
use klubbspel_backend::models::LeaderboardRow;
use klubbspel_backend::services::leaderboard_service::LeaderboardService;
use klubbspel_backend::services::match_service::MatchService;
use klubbspel_backend::services::player_directory::SqlPlayerDirectory;
use klubbspel_backend::services::standings;
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

/// Scenario E2 from the spec fixtures: three players appear in order
/// Alice, Peter, Morgan; Morgan upsets Alice, then Alice beats Peter from a
/// better position under CLASSIC rules (no change on that second match).
#[tokio::test]
async fn classic_ladder_matches_scenario_e2() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Ladder Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_ladder_series(&ctx.pool, club.id, LadderRules::Classic)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 3).await.unwrap();
    let (alice, peter, morgan) = (players[0].id, players[1].id, players[2].id);

    let match_service = build_match_service(&ctx.pool).await;

    match_service
        .create_match(series.id, alice, morgan, 1, 3, t("2026-03-01T00:00:00Z"))
        .await
        .unwrap();
    match_service
        .create_match(series.id, alice, peter, 3, 1, t("2026-03-02T00:00:00Z"))
        .await
        .unwrap();

    let rows = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    let rank = |p: uuid::Uuid| rows.iter().find(|r| r.player_id == p).unwrap().rank;

    assert_eq!(rank(morgan), 1);
    assert_eq!(rank(alice), 2);
    assert_eq!(rank(peter), 3);
}

/// Scenario E3/E4: the AGGRESSIVE variant swaps the loser down one slot when
/// the better player wins, unless the loser is already last.
#[tokio::test]
async fn aggressive_ladder_matches_scenarios_e3_and_e4() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Aggressive Ladder Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_ladder_series(&ctx.pool, club.id, LadderRules::Aggressive)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 3).await.unwrap();
    let (alice, peter, morgan) = (players[0].id, players[1].id, players[2].id);

    let match_service = build_match_service(&ctx.pool).await;

    // Establishes Morgan=1, Alice=2, Peter=3 (worse beats better cascades).
    match_service
        .create_match(series.id, alice, morgan, 1, 3, t("2026-03-01T00:00:00Z"))
        .await
        .unwrap();

    // Morgan(1) beats Alice(2): better wins, aggressive swaps Alice with Peter.
    match_service
        .create_match(series.id, morgan, alice, 3, 1, t("2026-03-02T00:00:00Z"))
        .await
        .unwrap();

    let rows = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    let rank = |p: uuid::Uuid| rows.iter().find(|r| r.player_id == p).unwrap().rank;
    assert_eq!(rank(morgan), 1);
    assert_eq!(rank(peter), 2);
    assert_eq!(rank(alice), 3);

    // Morgan beats Alice again; Alice is already last, so nothing changes.
    match_service
        .create_match(series.id, morgan, alice, 3, 1, t("2026-03-03T00:00:00Z"))
        .await
        .unwrap();

    let rows = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    let rank = |p: uuid::Uuid| rows.iter().find(|r| r.player_id == p).unwrap().rank;
    assert_eq!(rank(morgan), 1);
    assert_eq!(rank(peter), 2);
    assert_eq!(rank(alice), 3);
}

/// Scenario E5: if the leaderboard rows are externally deleted, the next
/// read rebuilds them from the match log and returns identical content.
#[tokio::test]
async fn fallback_rebuild_restores_truncated_leaderboard() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Fallback Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 4).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;
    for i in 0..4 {
        let a = players[i].id;
        let b = players[(i + 1) % 4].id;
        match_service
            .create_match(
                series.id,
                a,
                b,
                3,
                1,
                t(&format!("2026-04-0{}T00:00:00Z", i + 1)),
            )
            .await
            .unwrap();
    }

    let leaderboard_service = LeaderboardService::new(
        ctx.pool.clone(),
        Arc::new(SqlPlayerDirectory::new(ctx.pool.clone())),
    );
    let before = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();
    assert_eq!(before.total_players, 4);

    sqlx::query("DELETE FROM leaderboard_rows WHERE series_id = $1")
        .bind(series.id)
        .execute(&ctx.pool)
        .await
        .unwrap();

    let rows = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    assert!(rows.is_empty());

    let after = leaderboard_service
        .get_leaderboard(series.id, 10, None)
        .await
        .unwrap();

    let shape = |p: &klubbspel_backend::services::leaderboard_service::LeaderboardPage| {
        p.entries
            .iter()
            .map(|e| (e.player_id, e.rank, e.rating, e.matches_played))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&before), shape(&after));

    // Subsequent calls hit the now-populated cache without recomputing again.
    let rows_after_second_read = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    assert_eq!(rows_after_second_read.len(), 4);
}

/// Recompute twice with no intervening writes leaves the row set unchanged.
#[tokio::test]
async fn recompute_is_idempotent() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Idempotent Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 3)
        .await
        .unwrap();
    let players = fixtures::create_test_players(&ctx.pool, club.id, 2).await.unwrap();

    let match_service = build_match_service(&ctx.pool).await;
    match_service
        .create_match(series.id, players[0].id, players[1].id, 2, 0, t("2026-05-01T00:00:00Z"))
        .await
        .unwrap();

    let first = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    standings::recompute(&ctx.pool, series.id).await.unwrap();
    let second = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();

    let shape = |rows: &[LeaderboardRow]| {
        rows.iter()
            .map(|r| (r.player_id, r.rank, r.rating, r.matches_played, r.games_won, r.games_lost))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&first), shape(&second));
}

/// Recomputing a series with no matches yet leaves an empty row set and
/// never errors.
#[tokio::test]
async fn recompute_on_empty_series_yields_empty_leaderboard() {
    let ctx = setup::setup_test_db().await;
    let club = fixtures::create_test_club(&ctx.pool, "Empty Club", "password123")
        .await
        .unwrap();
    let series = fixtures::create_test_open_play_series(&ctx.pool, club.id, 5)
        .await
        .unwrap();

    standings::recompute(&ctx.pool, series.id).await.unwrap();

    let rows = LeaderboardRow::read_ordered(&ctx.pool, series.id).await.unwrap();
    assert!(rows.is_empty());
}
