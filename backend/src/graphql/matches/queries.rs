use crate::graphql::context::GraphQLContext;
use crate::graphql::matches::types::MatchType;
use async_graphql::*;
use uuid::Uuid;

#[derive(Default)]
pub struct MatchesQuery;

#[Object]
impl MatchesQuery {
    /// Matches of a series in the tie-broken chronological order.
    async fn series_matches(&self, ctx: &Context<'_>, series_id: ID) -> Result<Vec<MatchType>> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let series_id = Uuid::parse_str(&series_id).map_err(|_| Error::new("Invalid series ID"))?;

        let matches = gql_ctx
            .match_service
            .list_by_series_chronological(series_id)
            .await?;

        Ok(matches.into_iter().map(Into::into).collect())
    }
}
