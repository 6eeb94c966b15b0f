pub mod club;
pub mod leaderboard_row;
pub mod r#match;
pub mod player;
pub mod series;

pub use club::Club;
pub use leaderboard_row::LeaderboardRow;
pub use player::Player;
pub use r#match::Match;
pub use series::Series;
