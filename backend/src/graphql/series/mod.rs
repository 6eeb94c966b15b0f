pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod types;

pub use loaders::SeriesLoader;
pub use mutations::SeriesMutation;
pub use queries::SeriesQuery;
pub use types::SeriesType;
