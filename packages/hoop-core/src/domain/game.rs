use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::court::CourtId;
use crate::domain::user::UserId;

/// Opaque game identifier, minted by the roster service at creation.
pub type GameId = String;

/// Organizer input for creating a game.
///
/// The roster service mints the id, snapshots the court name, and starts the
/// roster at zero; everything else comes from here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub court_id: CourtId,
    pub date_time: OffsetDateTime,
    pub players_needed: u32,
    pub organizer: UserId,
}

/// A scheduled pickup session at a court with a bounded roster.
///
/// Invariants:
/// - `0 <= current_players <= players_needed`
/// - `court_id` references a court that existed at creation time
/// - `date_time` never changes after creation
///
/// `current_players` is written only by the roster service; every other
/// consumer holds a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub court_id: CourtId,
    /// Court name snapshotted at creation so game cards render without a
    /// second catalog lookup.
    pub court_name: String,
    pub date_time: OffsetDateTime,
    pub players_needed: u32,
    pub current_players: u32,
    pub organizer: UserId,
}

impl Game {
    /// Roster holds `players_needed` participants.
    pub fn is_full(&self) -> bool {
        self.current_players >= self.players_needed
    }

    /// The scheduled start has passed. The boundary instant counts as
    /// started.
    pub fn has_started(&self, now: OffsetDateTime) -> bool {
        now >= self.date_time
    }

    /// Closed to new joins: full, or past the scheduled start.
    pub fn is_closed(&self, now: OffsetDateTime) -> bool {
        self.is_full() || self.has_started(now)
    }

    /// Open roster spots. Never negative by the capacity invariant.
    pub fn capacity_remaining(&self) -> u32 {
        self.players_needed.saturating_sub(self.current_players)
    }
}
