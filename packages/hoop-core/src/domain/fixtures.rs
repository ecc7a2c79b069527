use time::{Duration, OffsetDateTime};

use super::court::Court;
use super::game::NewGame;

/// Demo catalog and demo games for first-run seeding.
///
/// The presentation layer loads these before the catalog collaborator has
/// delivered real data; the integration suites use them as shared ground
/// truth (the three courts sit ~0, ~2, and ~3.5 km from the downtown query
/// point).
pub struct DemoFixtures;

impl DemoFixtures {
    pub fn downtown_court() -> Court {
        Court {
            id: "court-1".to_string(),
            name: "Downtown Basketball Court".to_string(),
            latitude: 37.78825,
            longitude: -122.4324,
            address: "123 Main St, San Francisco, CA".to_string(),
            rating: Some(4.5),
        }
    }

    pub fn riverside_court() -> Court {
        Court {
            id: "court-2".to_string(),
            name: "Riverside Park Courts".to_string(),
            latitude: 37.79,
            longitude: -122.44,
            address: "456 Park Ave, San Francisco, CA".to_string(),
            rating: Some(4.2),
        }
    }

    pub fn mission_court() -> Court {
        Court {
            id: "court-3".to_string(),
            name: "Mission District Court".to_string(),
            latitude: 37.76,
            longitude: -122.42,
            address: "789 Mission St, San Francisco, CA".to_string(),
            rating: Some(4.8),
        }
    }

    /// The full demo catalog.
    pub fn courts() -> Vec<Court> {
        vec![
            Self::downtown_court(),
            Self::riverside_court(),
            Self::mission_court(),
        ]
    }

    /// Demo games relative to a caller-supplied `now` (no ambient time
    /// reads): a ten-player run tomorrow downtown, an eight-player run at
    /// Riverside the day after.
    pub fn games(now: OffsetDateTime) -> Vec<NewGame> {
        vec![
            NewGame {
                court_id: Self::downtown_court().id,
                date_time: now + Duration::days(1),
                players_needed: 10,
                organizer: "john-doe".to_string(),
            },
            NewGame {
                court_id: Self::riverside_court().id,
                date_time: now + Duration::days(2),
                players_needed: 8,
                organizer: "jane-smith".to_string(),
            },
        ]
    }
}
