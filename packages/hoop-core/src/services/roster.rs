//! Game roster coordination.
//!
//! Owns the capacity invariant: joins and leaves on one game are serialized
//! behind that game's own mutex, so the capacity check and the increment are
//! one atomic step and a check-then-act race can never overfill a roster.
//! Operations on different games proceed fully in parallel.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::game::{Game, GameId, NewGame};
use crate::domain::user::UserId;
use crate::errors::DomainError;
use crate::services::clock::{Clock, SystemClock};
use crate::services::proximity::CourtDirectory;

/// Roster state for one game: the record plus its participant set.
///
/// Invariant: `participants.len() == game.current_players as usize`.
struct GameRoster {
    game: Game,
    participants: HashSet<UserId>,
}

impl GameRoster {
    fn debug_check(&self) {
        debug_assert_eq!(
            self.participants.len(),
            self.game.current_players as usize,
            "participant set out of step with current_players"
        );
    }
}

/// Roster domain service: the authoritative holder of game state.
///
/// The presentation layer keeps only read-only projections (the `Game`
/// snapshots returned here) and refreshes them after each mutating call.
pub struct RosterService {
    /// In-memory lock table: one mutex per game scopes every mutation.
    games: DashMap<GameId, Arc<Mutex<GameRoster>>>,
    clock: Arc<dyn Clock>,
}

impl RosterService {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Roster service over an explicit time source (tests pin it).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            games: DashMap::new(),
            clock,
        }
    }

    /// Register a game for an organizer.
    ///
    /// Validates the capacity bound and that `court_id` references a court
    /// the directory knows, snapshots the court name, and starts the roster
    /// empty. Returns the created game.
    pub fn create_game(
        &self,
        new_game: NewGame,
        directory: &dyn CourtDirectory,
    ) -> Result<Game, DomainError> {
        if new_game.players_needed == 0 {
            return Err(DomainError::validation("players_needed must be at least 1"));
        }
        let court = directory
            .lookup(&new_game.court_id)
            .ok_or_else(|| DomainError::court_not_found(new_game.court_id.clone()))?;

        let game = Game {
            id: Uuid::new_v4().to_string(),
            court_id: court.id,
            court_name: court.name,
            date_time: new_game.date_time,
            players_needed: new_game.players_needed,
            current_players: 0,
            organizer: new_game.organizer,
        };
        debug!(
            game_id = %game.id,
            court_id = %game.court_id,
            players_needed = game.players_needed,
            "game created"
        );

        let roster = GameRoster {
            game: game.clone(),
            participants: HashSet::new(),
        };
        self.games
            .insert(game.id.clone(), Arc::new(Mutex::new(roster)));
        Ok(game)
    }

    /// Add `user_id` to the roster and return the refreshed game snapshot.
    ///
    /// The entire check-then-increment sequence runs under the game's mutex.
    pub async fn join(&self, game_id: &str, user_id: &str) -> Result<Game, DomainError> {
        let entry = self.roster_entry(game_id)?;
        let mut roster = entry.lock().await;

        if roster.game.has_started(self.clock.now()) {
            warn!(game_id, user_id, "join rejected: game closed");
            return Err(DomainError::GameClosed {
                game_id: game_id.to_owned(),
            });
        }
        if roster.participants.contains(user_id) {
            return Err(DomainError::AlreadyJoined {
                game_id: game_id.to_owned(),
                user_id: user_id.to_owned(),
            });
        }
        if roster.game.is_full() {
            warn!(game_id, user_id, "join rejected: game full");
            return Err(DomainError::GameFull {
                game_id: game_id.to_owned(),
                players_needed: roster.game.players_needed,
            });
        }

        roster.participants.insert(user_id.to_owned());
        roster.game.current_players += 1;
        roster.debug_check();
        debug!(
            game_id,
            user_id,
            current_players = roster.game.current_players,
            "user joined game"
        );
        Ok(roster.game.clone())
    }

    /// Remove `user_id` from the roster and return the refreshed snapshot.
    ///
    /// Legal even after the game closes; the close rule only gates joins.
    /// Never drives `current_players` below 0.
    pub async fn leave(&self, game_id: &str, user_id: &str) -> Result<Game, DomainError> {
        let entry = self.roster_entry(game_id)?;
        let mut roster = entry.lock().await;

        if !roster.participants.remove(user_id) {
            return Err(DomainError::NotAParticipant {
                game_id: game_id.to_owned(),
                user_id: user_id.to_owned(),
            });
        }
        roster.game.current_players = roster.game.current_players.saturating_sub(1);
        roster.debug_check();
        debug!(
            game_id,
            user_id,
            current_players = roster.game.current_players,
            "user left game"
        );
        Ok(roster.game.clone())
    }

    /// Open roster spots. Never negative by the capacity invariant.
    pub async fn capacity_remaining(&self, game_id: &str) -> Result<u32, DomainError> {
        let entry = self.roster_entry(game_id)?;
        let roster = entry.lock().await;
        Ok(roster.game.capacity_remaining())
    }

    /// Read-only snapshot of a game.
    pub async fn game(&self, game_id: &str) -> Result<Game, DomainError> {
        let entry = self.roster_entry(game_id)?;
        let roster = entry.lock().await;
        Ok(roster.game.clone())
    }

    /// Sorted snapshot of a game's participant ids.
    pub async fn participants(&self, game_id: &str) -> Result<Vec<UserId>, DomainError> {
        let entry = self.roster_entry(game_id)?;
        let roster = entry.lock().await;
        let mut ids: Vec<UserId> = roster.participants.iter().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// All games at a court, ascending by start time.
    pub async fn games_for_court(&self, court_id: &str) -> Vec<Game> {
        let mut games = self
            .snapshot_games(|game| game.court_id == court_id)
            .await;
        sort_by_start(&mut games);
        games
    }

    /// Games whose start time has not passed, ascending by start time,
    /// truncated to `limit`.
    pub async fn upcoming_games(&self, limit: usize) -> Vec<Game> {
        let now = self.clock.now();
        let mut games = self.snapshot_games(|game| !game.has_started(now)).await;
        sort_by_start(&mut games);
        games.truncate(limit);
        games
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn roster_entry(&self, game_id: &str) -> Result<Arc<Mutex<GameRoster>>, DomainError> {
        self.games
            .get(game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DomainError::game_not_found(game_id))
    }

    async fn snapshot_games<F>(&self, keep: F) -> Vec<Game>
    where
        F: Fn(&Game) -> bool,
    {
        // Collect handles first so no DashMap shard lock is held across an
        // await.
        let entries: Vec<Arc<Mutex<GameRoster>>> = self
            .games
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut games = Vec::new();
        for entry in entries {
            let roster = entry.lock().await;
            if keep(&roster.game) {
                games.push(roster.game.clone());
            }
        }
        games
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_by_start(games: &mut [Game]) {
    games.sort_by(|a, b| a.date_time.cmp(&b.date_time).then_with(|| a.id.cmp(&b.id)));
}
