use crate::graphql::context::GraphQLContext;
use crate::graphql::series::types::SeriesType;
use crate::models::Series;
use async_graphql::*;
use uuid::Uuid;

#[derive(Default)]
pub struct SeriesQuery;

#[Object]
impl SeriesQuery {
    async fn series(&self, ctx: &Context<'_>, id: ID) -> Result<Option<SeriesType>> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let series_id = Uuid::parse_str(&id).map_err(|_| Error::new("Invalid series ID"))?;

        let series = gql_ctx.series_loader.load_one(series_id).await?;

        Ok(series.map(Into::into))
    }

    /// Series belonging to the authenticated club, plus every `OPEN`
    /// (cross-club visible) series.
    async fn club_series(&self, ctx: &Context<'_>) -> Result<Vec<SeriesType>> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let club_id = gql_ctx.authenticated_club_id()?;

        let series = Series::find_visible_to_club(&gql_ctx.pool, club_id).await?;

        Ok(series.into_iter().map(Into::into).collect())
    }
}
