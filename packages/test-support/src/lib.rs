//! Unique test data helpers.
//!
//! Integration suites register users, courts, and games against shared
//! in-memory services; ULID-suffixed ids keep runs isolated from each other
//! without any coordination.

use ulid::Ulid;

/// `{prefix}-{ulid}`: a fresh id every call.
pub fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A fresh user id (`user-{ulid}`), the shape the identity collaborator hands
/// the core.
pub fn unique_user() -> String {
    unique_id("user")
}

/// A fresh court id (`court-{ulid}`), the shape the catalog collaborator
/// hands the core.
pub fn unique_court() -> String {
    unique_id("court")
}

/// A fresh email on the reserved `example.test` domain.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
