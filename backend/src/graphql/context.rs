use crate::db::DbPool;
use crate::graphql::clubs::ClubLoader;
use crate::graphql::matches::MatchesBySeriesLoader;
use crate::graphql::players::{PlayerLoader, PlayersByClubLoader};
use crate::graphql::series::SeriesLoader;
use crate::services::leaderboard_service::LeaderboardService;
use crate::services::match_service::MatchService;
use async_graphql::dataloader::{DataLoader, HashMapCache};
use std::sync::Arc;
use uuid::Uuid;

pub struct GraphQLContext {
    pub pool: DbPool,
    pub club_id: Option<Uuid>,
    pub match_service: Arc<MatchService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub club_loader: Arc<DataLoader<ClubLoader, HashMapCache>>,
    pub player_loader: Arc<DataLoader<PlayerLoader, HashMapCache>>,
    pub players_by_club_loader: Arc<DataLoader<PlayersByClubLoader, HashMapCache>>,
    pub series_loader: Arc<DataLoader<SeriesLoader, HashMapCache>>,
    pub matches_by_series_loader: Arc<DataLoader<MatchesBySeriesLoader, HashMapCache>>,
}

impl GraphQLContext {
    /// `leaderboard_service` is a long-lived singleton owned by the process
    /// (see `main.rs`), not rebuilt per request — its `BuildGuard` only
    /// coalesces concurrent rebuilds of the same series if it outlives a
    /// single request.
    pub fn new(pool: DbPool, club_id: Option<Uuid>, leaderboard_service: Arc<LeaderboardService>) -> Self {
        let match_service = Arc::new(MatchService::new(pool.clone(), leaderboard_service.clone()));

        Self {
            club_loader: Arc::new(DataLoader::with_cache(
                ClubLoader::new(pool.clone()),
                tokio::spawn,
                HashMapCache::default(),
            )),
            player_loader: Arc::new(DataLoader::with_cache(
                PlayerLoader::new(pool.clone()),
                tokio::spawn,
                HashMapCache::default(),
            )),
            players_by_club_loader: Arc::new(DataLoader::with_cache(
                PlayersByClubLoader::new(pool.clone()),
                tokio::spawn,
                HashMapCache::default(),
            )),
            series_loader: Arc::new(DataLoader::with_cache(
                SeriesLoader::new(pool.clone()),
                tokio::spawn,
                HashMapCache::default(),
            )),
            matches_by_series_loader: Arc::new(DataLoader::with_cache(
                MatchesBySeriesLoader::new(pool.clone()),
                tokio::spawn,
                HashMapCache::default(),
            )),
            match_service,
            leaderboard_service,
            pool,
            club_id,
        }
    }

    pub fn authenticated_club_id(&self) -> Result<Uuid, async_graphql::Error> {
        self.club_id
            .ok_or_else(|| async_graphql::Error::new("Authentication required"))
    }
}
