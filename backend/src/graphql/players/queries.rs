use crate::graphql::context::GraphQLContext;
use crate::graphql::players::types::PlayerType;
use async_graphql::*;
use uuid::Uuid;

#[derive(Default)]
pub struct PlayersQuery;

#[Object]
impl PlayersQuery {
    async fn player(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PlayerType>> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let player_id = Uuid::parse_str(&id).map_err(|_| Error::new("Invalid player ID"))?;

        let player = gql_ctx.player_loader.load_one(player_id).await?;

        Ok(player.map(Into::into))
    }

    /// Players belonging to the authenticated club.
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<PlayerType>> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let club_id = gql_ctx.authenticated_club_id()?;

        let players = gql_ctx
            .players_by_club_loader
            .load_one(club_id)
            .await?
            .unwrap_or_default();

        Ok(players.into_iter().map(Into::into).collect())
    }
}
