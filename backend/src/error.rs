use thiserror::Error;

/// Sub-reason for a rejected score tuple, named so callers can discriminate
/// without parsing the error message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidScoreReason {
    #[error("scores are tied")]
    Tie,
    #[error("neither score reaches the decisive set count")]
    NoWinnerReachedDecisive,
    #[error("a score exceeds the decisive set count")]
    ScoreExceedsDecisive,
    #[error("scores must be non-negative")]
    Negative,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Players must be distinct")]
    InvalidPlayers,

    #[error("Match time is outside the series window")]
    OutOfWindow,

    #[error("Invalid score: {0}")]
    InvalidScore(InvalidScoreReason),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A transient store failure deemed retriable by the caller. The write
    /// path aborts on this without persisting; the read path's fallback
    /// rebuild swallows it and returns the current (possibly empty) cache.
    #[error("Transient store error: {0}")]
    TransientStoreError(String),

    /// An invariant violation — e.g. the Leaderboard Store rejected a
    /// replace because ranks weren't a dense permutation. Always a bug.
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub trait IntoGraphQLError {
    fn into_graphql_error(self) -> async_graphql::Error;
}

impl IntoGraphQLError for AppError {
    fn into_graphql_error(self) -> async_graphql::Error {
        if matches!(self, AppError::Internal(_)) {
            tracing::error!(error = %self, "internal invariant violation");
            return async_graphql::Error::new("internal server error");
        }
        async_graphql::Error::new(self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
