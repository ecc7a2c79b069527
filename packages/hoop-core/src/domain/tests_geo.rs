use crate::domain::fixtures::DemoFixtures;
use crate::domain::geo::{
    cell_for, covering_cell_count, covering_cells, haversine_meters, GeoPoint,
};

const CELL: f64 = 0.01;

fn downtown() -> GeoPoint {
    GeoPoint::new(37.78825, -122.4324)
}

#[test]
fn distance_to_self_is_zero() {
    assert_eq!(haversine_meters(downtown(), downtown()), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let riverside = DemoFixtures::riverside_court().location();
    let there = haversine_meters(downtown(), riverside);
    let back = haversine_meters(riverside, downtown());
    assert!((there - back).abs() < 1e-6);
}

#[test]
fn demo_catalog_distances_are_plausible() {
    // Riverside sits under a kilometer from the downtown court, Mission a
    // few kilometers south; both inside the 5 km demo radius.
    let riverside = haversine_meters(downtown(), DemoFixtures::riverside_court().location());
    let mission = haversine_meters(downtown(), DemoFixtures::mission_court().location());

    assert!(riverside > 500.0 && riverside < 1_000.0, "riverside {riverside}");
    assert!(mission > 3_000.0 && mission < 4_000.0, "mission {mission}");
    assert!(riverside < mission);
}

#[test]
fn one_degree_of_meridian_is_about_111_km() {
    let south = GeoPoint::new(37.0, -122.0);
    let north = GeoPoint::new(38.0, -122.0);
    let d = haversine_meters(south, north);
    assert!((d - 111_195.0).abs() < 100.0, "meridian degree {d}");
}

#[test]
fn same_point_lands_in_same_cell() {
    assert_eq!(cell_for(downtown(), CELL), cell_for(downtown(), CELL));
}

#[test]
fn antimeridian_edges_share_a_cell() {
    let east = GeoPoint::new(0.0, 180.0);
    let west = GeoPoint::new(0.0, -180.0);
    assert_eq!(cell_for(east, CELL), cell_for(west, CELL));
}

#[test]
fn covering_includes_origin_cell_even_at_zero_radius() {
    let origin = downtown();
    let cells = covering_cells(origin, 0.0, CELL);
    assert!(cells.contains(&cell_for(origin, CELL)));
}

#[test]
fn covering_count_matches_enumeration() {
    let origin = downtown();
    for radius in [0.0, 500.0, 5_000.0, 50_000.0] {
        let count = covering_cell_count(origin, radius, CELL);
        let cells = covering_cells(origin, radius, CELL);
        assert_eq!(count as usize, cells.len(), "radius {radius}");
    }
}

#[test]
fn polar_radius_sweeps_the_whole_ring() {
    // Close enough to the pole that longitude degenerates: every longitude
    // cell on the touched latitude rows must be listed.
    let origin = GeoPoint::new(89.9999, 0.0);
    let cells = covering_cells(origin, 10_000.0, 1.0);
    let ring = 360;
    let lat_rows: std::collections::HashSet<i32> = cells.iter().map(|c| c.lat).collect();
    assert_eq!(cells.len(), lat_rows.len() * ring);
}
