use crate::graphql::context::GraphQLContext;
use crate::graphql::series::types::{LadderRulesGql, SeriesFormatGql, SeriesType, SportGql};
use crate::models::Series;
use async_graphql::*;
use chrono::{DateTime, Utc};

#[derive(Default)]
pub struct SeriesMutation;

#[Object]
impl SeriesMutation {
    /// Creates a series scoped to the authenticated club. This is admin
    /// plumbing around the ranking core, not part of the core itself — the
    /// core only ever reads series through `GetSeries`.
    #[allow(clippy::too_many_arguments)]
    async fn create_series(
        &self,
        ctx: &Context<'_>,
        sport: SportGql,
        format: SeriesFormatGql,
        ladder_rules: Option<LadderRulesGql>,
        sets_to_play: i32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<SeriesType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        let club_id = gql_ctx.authenticated_club_id()?;

        let series = Series::create(
            &gql_ctx.pool,
            club_id,
            sport.into(),
            format.into(),
            ladder_rules.unwrap_or(LadderRulesGql::Classic).into(),
            sets_to_play,
            starts_at,
            ends_at,
        )
        .await?;

        Ok(series.into())
    }
}
