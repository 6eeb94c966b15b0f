pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod types;

pub use loaders::ClubLoader;
pub use mutations::ClubsMutation;
pub use queries::ClubsQuery;
pub use types::ClubType;
