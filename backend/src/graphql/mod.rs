pub mod clubs;
pub mod context;
pub mod matches;
pub mod players;
pub mod schema;
pub mod series;

pub use context::GraphQLContext;
pub use schema::{Mutation, Query, Schema, build_schema};
