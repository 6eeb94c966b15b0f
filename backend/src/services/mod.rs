//! Service Layer
//!
//! Business logic extracted from GraphQL resolvers. Services encapsulate the
//! ranking engines, persistence orchestration, and validation, making them
//! testable independent of the GraphQL wiring.
//!
//! ## Architecture
//!
//! - **score_validator**: sport/format-aware predicate that a raw score is a legal match.
//! - **elo_engine**: deterministic Elo recomputation from a chronological match list.
//! - **ladder_engine**: deterministic ladder recomputation (CLASSIC/AGGRESSIVE).
//! - **standings**: orchestrates the validator and engines over one series, replaces C7.
//! - **match_service**: match creation/edit/delete orchestration, including the
//!   recompute-on-write hook.
//! - **build_guard**: per-series advisory coalescing for concurrent leaderboard rebuilds.
//! - **leaderboard_service**: read mediator — serves `GetLeaderboard`, falls back to a
//!   rebuild on cache miss.
//! - **player_directory**: narrow trait the leaderboard service uses to resolve display
//!   names, keeping the ranking core free of `sqlx` types.
//! - **validation**: input validation for club/player names and passwords.

pub mod build_guard;
pub mod elo_engine;
pub mod ladder_engine;
pub mod leaderboard_service;
pub mod match_service;
pub mod player_directory;
pub mod score_validator;
pub mod standings;
pub mod validation;
