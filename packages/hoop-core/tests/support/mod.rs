#![allow(dead_code)] // each suite pulls the helpers it needs

//! Shared helpers for the integration suites.

use std::sync::Arc;

use hoop_core::domain::fixtures::DemoFixtures;
use hoop_core::{Clock, NewGame, ProximityIndex, RosterService};
use parking_lot::Mutex;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Fixed epoch for the suites: a Friday evening, far from any clock edge.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-08-14 18:00 UTC)
}

/// Pinned, manually-advanced clock.
pub struct FixedClock {
    now: Mutex<OffsetDateTime>,
}

impl FixedClock {
    pub fn at(now: OffsetDateTime) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}

/// Roster service pinned to `now`, plus the handle for advancing time.
pub fn roster_at(now: OffsetDateTime) -> (RosterService, Arc<FixedClock>) {
    let clock = FixedClock::at(now);
    (RosterService::with_clock(clock.clone()), clock)
}

/// Proximity index seeded with the three-court demo catalog.
pub fn demo_index() -> ProximityIndex {
    let index = ProximityIndex::new();
    for court in DemoFixtures::courts() {
        index.upsert(court);
    }
    index
}

/// A game at `court_id` starting `starts_in` after `now`, organized by a
/// fresh unique user.
pub fn new_game(
    court_id: &str,
    starts_in: Duration,
    players_needed: u32,
    now: OffsetDateTime,
) -> NewGame {
    NewGame {
        court_id: court_id.to_string(),
        date_time: now + starts_in,
        players_needed,
        organizer: test_support::unique_user(),
    }
}
