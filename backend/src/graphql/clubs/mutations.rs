use crate::auth::{create_jwt, hash_password};
use crate::config::Config;
use crate::graphql::context::GraphQLContext;
use crate::models;
use crate::services::validation::{validate_name, validate_password};
use async_graphql::*;

#[derive(Default)]
pub struct ClubsMutation;

#[Object]
impl ClubsMutation {
    /// Registers a new club and returns a session token for it.
    async fn register_club(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The club name")] name: String,
        #[graphql(desc = "The club password")] password: String,
    ) -> Result<String> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let config = ctx.data::<Config>()?;

        validate_name(&name, "Club name")?;
        validate_password(&password)?;

        if models::Club::find_by_name(&gql_ctx.pool, name.trim())
            .await?
            .is_some()
        {
            return Err(Error::new("Club name is already taken"));
        }

        let password_hash = hash_password(&password)?;
        let club = models::Club::create(&gql_ctx.pool, name.trim(), &password_hash).await?;

        let token = create_jwt(club.id, &config.jwt_secret)?;

        Ok(token)
    }
}
