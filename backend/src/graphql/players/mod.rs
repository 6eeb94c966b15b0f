pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod types;

pub use loaders::{PlayerLoader, PlayersByClubLoader};
pub use mutations::PlayersMutation;
pub use queries::PlayersQuery;
pub use types::PlayerType;
