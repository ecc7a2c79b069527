#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::court::{Court, CourtId};
pub use domain::game::{Game, GameId, NewGame};
pub use domain::geo::GeoPoint;
pub use domain::user::{User, UserId};
pub use errors::DomainError;
pub use services::clock::{Clock, SystemClock};
pub use services::proximity::{CourtDirectory, ProximityIndex};
pub use services::roster::RosterService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
