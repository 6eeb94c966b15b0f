use crate::config::Config;
use crate::db::DbPool;
use crate::graphql::{GraphQLContext, Schema};
use crate::services::leaderboard_service::LeaderboardService;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::Extension as AxumExtension, response::{Html, IntoResponse}};
use std::sync::Arc;
use uuid::Uuid;

/// HTTP GraphQL handler for queries and mutations.
///
/// No-op subscriptions: clients re-fetch the leaderboard rather than being
/// pushed updates (real-time push is a non-goal), so there is no SSE/WS
/// variant of this handler.
pub async fn graphql_handler(
    schema: AxumExtension<Schema>,
    pool: AxumExtension<DbPool>,
    config: AxumExtension<Config>,
    club_id: AxumExtension<Option<Uuid>>,
    leaderboard_service: AxumExtension<Arc<LeaderboardService>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let ctx = GraphQLContext::new(pool.0, *club_id, leaderboard_service.0);

    schema
        .0
        .execute(req.into_inner().data(ctx).data(config.0))
        .await
        .into()
}

pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
