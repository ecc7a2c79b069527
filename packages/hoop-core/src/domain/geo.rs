//! Geodesy helpers shared by the proximity index and its tests.
//!
//! Everything here is pure math on a spherical Earth. The spherical
//! approximation is within ~0.5% of the ellipsoid, and it is consistent and
//! monotonic, which is all distance ranking needs.
//!
//! These live in `domain` so the index, the services, and the tests share a
//! single source of truth for "how far apart are two points" and "which grid
//! cell does a point land in".

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Meters spanned by one degree of latitude (and by one degree of longitude
/// at the equator).
const METERS_PER_DEGREE: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

/// A point on the sphere, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points, via the haversine formula.
pub fn haversine_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp before asin: rounding can push h a hair past 1 for antipodes.
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

/// Grid cell key: latitude/longitude floored to multiples of the cell size,
/// with the longitude index wrapped onto a fixed ring so both sides of the
/// antimeridian land in the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub lat: i32,
    pub lon: i32,
}

/// Number of longitude cells in one ring around the globe.
fn lon_ring(cell_size_deg: f64) -> i64 {
    ((360.0 / cell_size_deg).ceil() as i64).max(1)
}

/// Cell containing `point`.
pub fn cell_for(point: GeoPoint, cell_size_deg: f64) -> CellKey {
    let ring = lon_ring(cell_size_deg);
    let lat = (point.latitude / cell_size_deg).floor() as i64;
    let lon = ((point.longitude / cell_size_deg).floor() as i64).rem_euclid(ring);
    CellKey {
        lat: lat as i32,
        lon: lon as i32,
    }
}

/// Cell bounds a radius around an origin can touch.
struct CellBounds {
    lat_lo: i64,
    lat_hi: i64,
    lon_center: i64,
    /// Cells either side of `lon_center`; `None` means sweep the full ring
    /// (the radius reaches a pole, where longitude degenerates).
    lon_span: Option<i64>,
    ring: i64,
}

fn cell_bounds(origin: GeoPoint, radius_meters: f64, cell_size_deg: f64) -> CellBounds {
    let ring = lon_ring(cell_size_deg);
    let lat_margin = radius_meters / METERS_PER_DEGREE;
    let lat_lo = ((origin.latitude - lat_margin) / cell_size_deg).floor() as i64;
    let lat_hi = ((origin.latitude + lat_margin) / cell_size_deg).floor() as i64;

    // One longitude degree shrinks with latitude, so size the sweep at the
    // widest latitude the radius can reach on origin's side of the equator.
    let widest_lat = if origin.latitude >= 0.0 {
        (origin.latitude + lat_margin).min(90.0)
    } else {
        (origin.latitude - lat_margin).max(-90.0)
    };
    let meters_per_lon_degree = METERS_PER_DEGREE * widest_lat.to_radians().cos();

    let lon_center = ((origin.longitude / cell_size_deg).floor() as i64).rem_euclid(ring);
    let lon_span = if meters_per_lon_degree <= f64::EPSILON {
        None
    } else {
        let lon_margin_deg = radius_meters / meters_per_lon_degree;
        let span = (lon_margin_deg / cell_size_deg).ceil() as i64 + 1;
        if 2 * span + 1 >= ring {
            None
        } else {
            Some(span)
        }
    };

    CellBounds {
        lat_lo,
        lat_hi,
        lon_center,
        lon_span,
        ring,
    }
}

/// How many cells `covering_cells` would enumerate, without allocating.
///
/// The index compares this against its occupied-cell count and falls back to
/// a straight catalog scan when the sweep would be wider than the catalog.
pub fn covering_cell_count(origin: GeoPoint, radius_meters: f64, cell_size_deg: f64) -> u64 {
    let bounds = cell_bounds(origin, radius_meters, cell_size_deg);
    let lat_cells = (bounds.lat_hi - bounds.lat_lo + 1) as u64;
    let lon_cells = match bounds.lon_span {
        Some(span) => (2 * span + 1) as u64,
        None => bounds.ring as u64,
    };
    lat_cells.saturating_mul(lon_cells)
}

/// Every cell whose contents can fall within `radius_meters` of `origin`.
///
/// Over-approximates: a listed cell may hold only courts past the radius
/// (the exact haversine filter runs afterwards), but no cell containing a
/// court within the radius is ever omitted.
pub fn covering_cells(origin: GeoPoint, radius_meters: f64, cell_size_deg: f64) -> Vec<CellKey> {
    let bounds = cell_bounds(origin, radius_meters, cell_size_deg);

    let lon_cells: Vec<i64> = match bounds.lon_span {
        Some(span) => (-span..=span)
            .map(|offset| (bounds.lon_center + offset).rem_euclid(bounds.ring))
            .collect(),
        None => (0..bounds.ring).collect(),
    };

    let mut cells = Vec::with_capacity(
        ((bounds.lat_hi - bounds.lat_lo + 1) as usize).saturating_mul(lon_cells.len()),
    );
    for lat in bounds.lat_lo..=bounds.lat_hi {
        for &lon in &lon_cells {
            cells.push(CellKey {
                lat: lat as i32,
                lon: lon as i32,
            });
        }
    }
    cells
}
