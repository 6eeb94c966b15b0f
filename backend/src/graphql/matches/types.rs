use crate::models::Match;
use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};

pub struct MatchType {
    m: Match,
}

impl From<Match> for MatchType {
    fn from(m: Match) -> Self {
        Self { m }
    }
}

#[Object(name = "Match")]
impl MatchType {
    async fn id(&self) -> ID {
        ID(self.m.id.to_string())
    }

    async fn series_id(&self) -> ID {
        ID(self.m.series_id.to_string())
    }

    async fn player_a_id(&self) -> ID {
        ID(self.m.player_a_id.to_string())
    }

    async fn player_b_id(&self) -> ID {
        ID(self.m.player_b_id.to_string())
    }

    async fn score_a(&self) -> i32 {
        self.m.score_a
    }

    async fn score_b(&self) -> i32 {
        self.m.score_b
    }

    async fn played_at(&self) -> DateTime<Utc> {
        self.m.played_at
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.m.created_at
    }
}

/// Result of a write that may have left the leaderboard cache stale if the
/// synchronous recompute hook failed transiently. The write itself always
/// succeeded by the time this is returned.
pub struct MutationOutcomeType {
    pub recompute_warning: bool,
}

#[Object(name = "MutationOutcome")]
impl MutationOutcomeType {
    /// True if the recompute triggered by this write failed transiently.
    /// The write is durable regardless; the next read self-heals.
    async fn recompute_warning(&self) -> bool {
        self.recompute_warning
    }
}

pub struct ReportMatchResultType {
    pub match_: MatchType,
    pub recompute_warning: bool,
}

#[Object(name = "ReportMatchResult")]
impl ReportMatchResultType {
    async fn r#match(&self) -> &MatchType {
        &self.match_
    }

    async fn recompute_warning(&self) -> bool {
        self.recompute_warning
    }
}
