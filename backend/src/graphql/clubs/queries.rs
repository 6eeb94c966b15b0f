use crate::auth::{create_jwt, verify_password};
use crate::config::Config;
use crate::graphql::clubs::types::ClubType;
use crate::graphql::context::GraphQLContext;
use crate::models;
use async_graphql::*;
use uuid::Uuid;

#[derive(Default)]
pub struct ClubsQuery;

#[Object]
impl ClubsQuery {
    async fn login(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The club ID")] club_id: ID,
        #[graphql(desc = "The club password")] password: String,
    ) -> Result<String> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let config = ctx.data::<Config>()?;

        let club_uuid = Uuid::parse_str(&club_id).map_err(|_| Error::new("Invalid club ID"))?;

        let club = models::Club::find_by_id(&gql_ctx.pool, club_uuid)
            .await?
            .ok_or_else(|| Error::new("Invalid credentials"))?;

        verify_password(&password, &club.password_hash)
            .map_err(|_| Error::new("Invalid credentials"))?;

        let token = create_jwt(club_uuid, &config.jwt_secret)?;

        Ok(token)
    }

    /// The currently authenticated club, resolved from the session token.
    async fn me(&self, ctx: &Context<'_>) -> Result<ClubType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let club_id = gql_ctx.authenticated_club_id()?;

        let club = gql_ctx
            .club_loader
            .load_one(club_id)
            .await?
            .ok_or_else(|| Error::new("Club not found"))?;

        Ok(club.into())
    }
}
