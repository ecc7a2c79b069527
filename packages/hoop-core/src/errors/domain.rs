//! Domain-level error type surfaced to the presentation layer.
//!
//! Every variant is a precondition violation, not a transient fault: it is
//! returned synchronously to the immediate caller and never retried
//! internally. Translating variants into user-visible copy is the
//! presentation layer's job; the core only surfaces the structured kind and
//! its `Display` text.

use thiserror::Error;

use crate::domain::court::CourtId;
use crate::domain::game::GameId;
use crate::domain::user::UserId;

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// Unknown game id.
    #[error("game not found: {game_id}")]
    GameNotFound { game_id: GameId },

    /// The roster already holds `players_needed` participants.
    #[error("game {game_id} is full ({players_needed} players)")]
    GameFull {
        game_id: GameId,
        players_needed: u32,
    },

    /// The scheduled start has passed; the roster takes no further joins.
    #[error("game {game_id} is closed to new joins")]
    GameClosed { game_id: GameId },

    /// The user is already on the roster. Joins are idempotent-reject, never
    /// double-count.
    #[error("user {user_id} already joined game {game_id}")]
    AlreadyJoined { game_id: GameId, user_id: UserId },

    /// The user is not on the roster.
    #[error("user {user_id} is not a participant of game {game_id}")]
    NotAParticipant { game_id: GameId, user_id: UserId },

    /// `court_id` does not reference an indexed court.
    #[error("court not found: {court_id}")]
    CourtNotFound { court_id: CourtId },

    /// Query radius that cannot rank anything (negative or non-finite).
    #[error("invalid query radius: {radius_meters} m")]
    InvalidRadius { radius_meters: f64 },

    /// Input validation or business rule violation not covered above.
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn game_not_found(game_id: impl Into<GameId>) -> Self {
        Self::GameNotFound {
            game_id: game_id.into(),
        }
    }

    pub fn court_not_found(court_id: impl Into<CourtId>) -> Self {
        Self::CourtNotFound {
            court_id: court_id.into(),
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
