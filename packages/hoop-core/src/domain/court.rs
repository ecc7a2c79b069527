use serde::{Deserialize, Serialize};

use crate::domain::geo::GeoPoint;

/// Opaque court identifier, issued by the external catalog collaborator.
pub type CourtId = String;

/// A physical court location, independent of any scheduled game.
///
/// Immutable reference data: the catalog collaborator creates and updates
/// these records; the core only indexes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating: Option<f64>,
}

impl Court {
    /// Location as a geo point for distance math.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
