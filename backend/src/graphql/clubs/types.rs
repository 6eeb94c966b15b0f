use crate::models::Club;
use async_graphql::{Object, ID};

pub struct ClubType {
    club: Club,
}

impl From<Club> for ClubType {
    fn from(club: Club) -> Self {
        Self { club }
    }
}

#[Object(name = "Club")]
impl ClubType {
    async fn id(&self) -> ID {
        ID(self.club.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.club.name
    }
}
