pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod types;

pub use loaders::MatchesBySeriesLoader;
pub use mutations::MatchesMutation;
pub use queries::MatchesQuery;
pub use types::MatchType;
