use async_graphql::*;

use crate::graphql::{clubs, matches, players, series};

/// Root Query combining all feature queries
#[derive(MergedObject, Default)]
pub struct Query(
    clubs::ClubsQuery,
    players::PlayersQuery,
    series::SeriesQuery,
    matches::MatchesQuery,
);

/// Root Mutation combining all feature mutations
#[derive(MergedObject, Default)]
pub struct Mutation(
    clubs::ClubsMutation,
    players::PlayersMutation,
    series::SeriesMutation,
    matches::MatchesMutation,
);

pub type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema() -> Schema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .limit_depth(10)
        .limit_complexity(100)
        .finish()
}
