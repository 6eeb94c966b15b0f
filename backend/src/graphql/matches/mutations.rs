use crate::graphql::context::GraphQLContext;
use crate::graphql::matches::types::{MutationOutcomeType, ReportMatchResultType};
use crate::models::r#match::Match;
use crate::services::leaderboard_service::RecomputeOutcome;
use async_graphql::*;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Default)]
pub struct MatchesMutation;

fn warned(outcome: RecomputeOutcome) -> bool {
    matches!(outcome, RecomputeOutcome::Warning)
}

#[Object]
impl MatchesMutation {
    #[allow(clippy::too_many_arguments)]
    async fn report_match(
        &self,
        ctx: &Context<'_>,
        series_id: ID,
        player_a_id: ID,
        player_b_id: ID,
        score_a: i32,
        score_b: i32,
        played_at: DateTime<Utc>,
    ) -> Result<ReportMatchResultType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        gql_ctx.authenticated_club_id()?;

        let series_id = Uuid::parse_str(&series_id).map_err(|_| Error::new("Invalid series ID"))?;
        let player_a_id =
            Uuid::parse_str(&player_a_id).map_err(|_| Error::new("Invalid player A ID"))?;
        let player_b_id =
            Uuid::parse_str(&player_b_id).map_err(|_| Error::new("Invalid player B ID"))?;

        let (match_id, outcome) = gql_ctx
            .match_service
            .create_match(series_id, player_a_id, player_b_id, score_a, score_b, played_at)
            .await?;

        let m = Match::find_by_id(&gql_ctx.pool, match_id)
            .await?
            .ok_or_else(|| Error::new("Match vanished after creation"))?;

        Ok(ReportMatchResultType {
            match_: m.into(),
            recompute_warning: warned(outcome),
        })
    }

    /// Only the fields given are changed; anything left `null` keeps its
    /// current value on the match (spec.md §4.1's "merged tuple" contract).
    #[allow(clippy::too_many_arguments)]
    async fn edit_match(
        &self,
        ctx: &Context<'_>,
        match_id: ID,
        player_a_id: Option<ID>,
        player_b_id: Option<ID>,
        score_a: Option<i32>,
        score_b: Option<i32>,
        played_at: Option<DateTime<Utc>>,
    ) -> Result<MutationOutcomeType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        gql_ctx.authenticated_club_id()?;

        let match_id = Uuid::parse_str(&match_id).map_err(|_| Error::new("Invalid match ID"))?;
        let player_a_id = player_a_id
            .map(|id| Uuid::parse_str(&id).map_err(|_| Error::new("Invalid player A ID")))
            .transpose()?;
        let player_b_id = player_b_id
            .map(|id| Uuid::parse_str(&id).map_err(|_| Error::new("Invalid player B ID")))
            .transpose()?;

        let outcome = gql_ctx
            .match_service
            .update_match(match_id, player_a_id, player_b_id, score_a, score_b, played_at)
            .await?;

        Ok(MutationOutcomeType {
            recompute_warning: warned(outcome),
        })
    }

    /// Idempotent: deleting an already-absent match still reports success.
    async fn delete_match(&self, ctx: &Context<'_>, match_id: ID) -> Result<MutationOutcomeType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;
        gql_ctx.authenticated_club_id()?;

        let match_id = Uuid::parse_str(&match_id).map_err(|_| Error::new("Invalid match ID"))?;

        let outcome = gql_ctx.match_service.delete_match(match_id).await?;

        Ok(MutationOutcomeType {
            recompute_warning: outcome.map(warned).unwrap_or(false),
        })
    }
}
