use crate::models::Player;
use async_graphql::{Object, ID};

pub struct PlayerType {
    player: Player,
}

impl From<Player> for PlayerType {
    fn from(player: Player) -> Self {
        Self { player }
    }
}

#[Object(name = "Player")]
impl PlayerType {
    async fn id(&self) -> ID {
        ID(self.player.id.to_string())
    }

    async fn club_id(&self) -> ID {
        ID(self.player.club_id.to_string())
    }

    async fn display_name(&self) -> &str {
        &self.player.display_name
    }
}
