//! Property tests for the geodesy helpers (pure domain, no services).
//!
//! Contract under test:
//! - haversine is a distance: non-negative, zero at identity, symmetric,
//!   bounded by half the great circle
//! - ranking monotonicity along a meridian
//! - the covering-cell sweep never omits the cell of an in-radius point

use proptest::prelude::*;

use crate::domain::geo::{cell_for, covering_cells, haversine_meters, GeoPoint};

/// Half the great circle on the spherical model, with rounding headroom.
const MAX_DISTANCE_METERS: f64 = 20_020_000.0;

fn any_point() -> impl Strategy<Value = GeoPoint> {
    (-85.0f64..85.0, -180.0f64..180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, ..ProptestConfig::default() })]

    #[test]
    fn prop_distance_is_nonnegative_and_bounded(a in any_point(), b in any_point()) {
        let d = haversine_meters(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= MAX_DISTANCE_METERS, "distance {d} past half circle");
    }

    #[test]
    fn prop_distance_is_zero_at_identity(p in any_point()) {
        prop_assert_eq!(haversine_meters(p, p), 0.0);
    }

    #[test]
    fn prop_distance_is_symmetric(a in any_point(), b in any_point()) {
        let there = haversine_meters(a, b);
        let back = haversine_meters(b, a);
        prop_assert!((there - back).abs() < 1e-6, "{there} vs {back}");
    }

    /// Moving further north along one meridian never ranks closer.
    #[test]
    fn prop_monotonic_along_meridian(
        origin in any_point(),
        near in 0.0f64..0.5,
        extra in 1e-6f64..0.5,
    ) {
        let near_point = GeoPoint::new(origin.latitude + near, origin.longitude);
        let far_point = GeoPoint::new(origin.latitude + near + extra, origin.longitude);

        let d_near = haversine_meters(origin, near_point);
        let d_far = haversine_meters(origin, far_point);
        prop_assert!(d_near <= d_far, "{d_near} > {d_far}");
    }

    /// Any point inside the radius has its cell in the covering sweep.
    #[test]
    fn prop_covering_never_omits_an_in_radius_cell(
        origin in any_point(),
        d_lat in -0.4f64..0.4,
        d_lon in -0.4f64..0.4,
        radius in 0.0f64..50_000.0,
        cell_size in prop::sample::select(vec![0.005f64, 0.01, 0.02, 0.1]),
    ) {
        let point = GeoPoint::new(origin.latitude + d_lat, origin.longitude + d_lon);
        let distance = haversine_meters(origin, point);
        prop_assume!(distance <= radius * 0.999);

        let cells = covering_cells(origin, radius, cell_size);
        prop_assert!(
            cells.contains(&cell_for(point, cell_size)),
            "cell of point {distance} m away missing from sweep (radius {radius} m)"
        );
    }
}
