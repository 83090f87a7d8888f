use super::test_utils::*;
use crate::filter::{filter_by_radius, AreaFilter};
use crate::geo::{distance_km, Point};

#[test]
fn test_radius_boundary_inclusive() {
    let center = Point::new(-33.4378, -70.6405);
    let target = spot("Bellavista", -33.4335, -70.6345);
    let exact = distance_km(center.lat, center.lng, -33.4335, -70.6345);
    let spots = vec![target];

    assert_eq!(filter_by_radius(&spots, center, exact).len(), 1);
    assert!(filter_by_radius(&spots, center, exact - 0.01).is_empty());
}

#[test]
fn test_excludes_unlocated_regardless_of_radius() {
    let spots = vec![unlocated("nowhere"), spot("here", 0.0, 0.0)];

    let results = filter_by_radius(&spots, Point::new(0.0, 0.0), f64::INFINITY);

    assert_eq!(names(&results), vec!["here"]);
}

#[test]
fn test_nearest_first() {
    let spots = santiago_spots();

    let results = filter_by_radius(&spots, Point::new(-33.4378, -70.6504), 5.0);

    assert_eq!(names(&results), vec!["Plaza de Armas", "Lastarria", "Bellavista", "Providencia"]);
    for pair in results.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_nan_centre_keeps_nothing() {
    let spots = santiago_spots();
    assert!(filter_by_radius(&spots, Point::new(f64::NAN, 0.0), 1000.0).is_empty());
}

#[test]
fn test_area_filter_radius_matches_function() {
    let spots = santiago_spots();
    let center = Point::new(-33.45, -70.66);
    assert_eq!(
        AreaFilter::radius(150.0).apply(&spots, center),
        filter_by_radius(&spots, center, 150.0)
    );
}

#[test]
fn test_equal_distances_keep_input_order() {
    let spots = vec![spot("east", 0.0, 0.5), spot("north", 0.5, 0.0), spot("west", 0.0, -0.5)];
    let center = Point::new(0.0, 0.0);

    let results = filter_by_radius(&spots, center, 100.0);
    assert_eq!(names(&results), vec!["east", "north", "west"]);
    assert_eq!(results[0].distance, results[2].distance);

    let reversed: Vec<_> = spots.iter().rev().cloned().collect();
    let results = filter_by_radius(&reversed, center, 100.0);
    assert_eq!(names(&results), vec!["west", "north", "east"]);
}
