use crate::graphql::context::GraphQLContext;
use crate::models::series::{LadderRules, Series, SeriesFormat, Sport};
use crate::services::leaderboard_service::{LeaderboardEntry, LeaderboardPage};
use async_graphql::{Context, Enum, Object, ID};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum SportGql {
    TableTennis,
    Tennis,
    Padel,
    Badminton,
    Squash,
    Pickleball,
}

impl From<Sport> for SportGql {
    fn from(s: Sport) -> Self {
        match s {
            Sport::TableTennis => SportGql::TableTennis,
            Sport::Tennis => SportGql::Tennis,
            Sport::Padel => SportGql::Padel,
            Sport::Badminton => SportGql::Badminton,
            Sport::Squash => SportGql::Squash,
            Sport::Pickleball => SportGql::Pickleball,
        }
    }
}

impl From<SportGql> for Sport {
    fn from(s: SportGql) -> Self {
        match s {
            SportGql::TableTennis => Sport::TableTennis,
            SportGql::Tennis => Sport::Tennis,
            SportGql::Padel => Sport::Padel,
            SportGql::Badminton => Sport::Badminton,
            SportGql::Squash => Sport::Squash,
            SportGql::Pickleball => Sport::Pickleball,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum SeriesFormatGql {
    OpenPlay,
    Ladder,
}

impl From<SeriesFormat> for SeriesFormatGql {
    fn from(f: SeriesFormat) -> Self {
        match f {
            SeriesFormat::OpenPlay => SeriesFormatGql::OpenPlay,
            SeriesFormat::Ladder => SeriesFormatGql::Ladder,
        }
    }
}

impl From<SeriesFormatGql> for SeriesFormat {
    fn from(f: SeriesFormatGql) -> Self {
        match f {
            SeriesFormatGql::OpenPlay => SeriesFormat::OpenPlay,
            SeriesFormatGql::Ladder => SeriesFormat::Ladder,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum LadderRulesGql {
    Classic,
    Aggressive,
}

impl From<LadderRules> for LadderRulesGql {
    fn from(r: LadderRules) -> Self {
        match r {
            LadderRules::Classic => LadderRulesGql::Classic,
            LadderRules::Aggressive => LadderRulesGql::Aggressive,
        }
    }
}

impl From<LadderRulesGql> for LadderRules {
    fn from(r: LadderRulesGql) -> Self {
        match r {
            LadderRulesGql::Classic => LadderRules::Classic,
            LadderRulesGql::Aggressive => LadderRules::Aggressive,
        }
    }
}

pub struct SeriesType {
    series: Series,
}

impl From<Series> for SeriesType {
    fn from(series: Series) -> Self {
        Self { series }
    }
}

const DEFAULT_PAGE_SIZE: i32 = 50;

#[Object(name = "Series")]
impl SeriesType {
    async fn id(&self) -> ID {
        ID(self.series.id.to_string())
    }

    async fn club_id(&self) -> ID {
        ID(self.series.club_id.to_string())
    }

    async fn sport(&self) -> SportGql {
        self.series.sport.into()
    }

    async fn format(&self) -> SeriesFormatGql {
        self.series.format.into()
    }

    async fn ladder_rules(&self) -> LadderRulesGql {
        self.series.ladder_rules.into()
    }

    async fn sets_to_play(&self) -> i32 {
        self.series.sets_to_play
    }

    async fn starts_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.series.starts_at
    }

    async fn ends_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.series.ends_at
    }

    async fn leaderboard(
        &self,
        ctx: &Context<'_>,
        page_size: Option<i32>,
        page_cursor: Option<String>,
    ) -> async_graphql::Result<LeaderboardPageType> {
        let gql_ctx = ctx.data::<GraphQLContext>()?;

        let page = gql_ctx
            .leaderboard_service
            .get_leaderboard(
                self.series.id,
                page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize,
                page_cursor.as_deref(),
            )
            .await?;

        Ok(page.into())
    }
}

pub struct LeaderboardEntryType {
    entry: LeaderboardEntry,
}

impl From<LeaderboardEntry> for LeaderboardEntryType {
    fn from(entry: LeaderboardEntry) -> Self {
        Self { entry }
    }
}

#[Object(name = "LeaderboardEntry")]
impl LeaderboardEntryType {
    async fn player_id(&self) -> ID {
        ID(self.entry.player_id.to_string())
    }

    async fn display_name(&self) -> &str {
        &self.entry.display_name
    }

    async fn rank(&self) -> i32 {
        self.entry.rank
    }

    async fn rating(&self) -> i32 {
        self.entry.rating
    }

    async fn matches_played(&self) -> i32 {
        self.entry.matches_played
    }

    async fn matches_won(&self) -> i32 {
        self.entry.matches_won
    }

    async fn matches_lost(&self) -> i32 {
        self.entry.matches_lost
    }

    async fn games_won(&self) -> i32 {
        self.entry.games_won
    }

    async fn games_lost(&self) -> i32 {
        self.entry.games_lost
    }
}

pub struct LeaderboardPageType {
    page: LeaderboardPage,
}

impl From<LeaderboardPage> for LeaderboardPageType {
    fn from(page: LeaderboardPage) -> Self {
        Self { page }
    }
}

#[Object(name = "LeaderboardPage")]
impl LeaderboardPageType {
    async fn entries(&self) -> Vec<LeaderboardEntryType> {
        self.page
            .entries
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    async fn next_cursor(&self) -> Option<&str> {
        self.page.next_cursor.as_deref()
    }

    async fn total_players(&self) -> i32 {
        self.page.total_players
    }
}
