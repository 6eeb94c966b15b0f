use crate::graphql::context::GraphQLContext;
use crate::graphql::players::types::PlayerType;
use crate::models;
use crate::services::validation::validate_name;
use async_graphql::*;

#[derive(Default)]
pub struct PlayersMutation;

#[Object]
impl PlayersMutation {
    async fn create_player(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The player's display name")] display_name: String,
    ) -> Result<PlayerType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let club_id = gql_ctx.authenticated_club_id()?;

        validate_name(&display_name, "Player name")?;

        let player = models::Player::create(&gql_ctx.pool, club_id, display_name.trim()).await?;

        Ok(player.into())
    }
}
