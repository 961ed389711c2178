// Unit tests for DOPC

use dopc::core::{
    distance::{delivery_distance, haversine_distance},
    pricing::{evaluate, matching_range, small_order_surcharge, PricingError},
};
use dopc::models::{Coordinate, DeliverySpecs, DistanceRange};

fn helsinki_specs() -> DeliverySpecs {
    DeliverySpecs {
        order_minimum_no_surcharge: 1000.0,
        base_price: 190.0,
        distance_ranges: vec![
            DistanceRange::new(0.0, 500.0, 0.0, 0.0),
            DistanceRange::new(500.0, 1000.0, 100.0, 0.0),
            DistanceRange::new(1000.0, 1500.0, 200.0, 0.0),
            DistanceRange::new(1500.0, 2000.0, 200.0, 1.0),
            DistanceRange::new(2000.0, 0.0, 0.0, 0.0),
        ],
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(60.17094, 24.93087, 60.17094, 24.93087);
    assert!(distance < 0.01);
}

#[test]
fn test_helsinki_venue_distance() {
    let user = Coordinate::new(60.17094, 24.93087);
    let venue = Coordinate::new(60.17012143, 24.92813512);
    assert_eq!(delivery_distance(user, venue), 177);
}

#[test]
fn test_distance_symmetry_across_points() {
    let points = [
        Coordinate::new(60.17094, 24.93087),
        Coordinate::new(52.5003197, 13.4363712),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(89.9, -179.9),
        Coordinate::new(-90.0, 180.0),
    ];

    for a in points {
        assert_eq!(delivery_distance(a, a), 0);
        for b in points {
            assert_eq!(delivery_distance(a, b), delivery_distance(b, a));
        }
    }
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let a = Coordinate::new(0.0, 0.0);
    let b = Coordinate::new(0.0, 180.0);
    let expected = (std::f64::consts::PI * 6_371_000.0).round_ties_even() as i64;
    assert_eq!(delivery_distance(a, b), expected);
}

#[test]
fn test_helsinki_fee_and_surcharge() {
    let charges = evaluate(1000, 177, &helsinki_specs()).unwrap();
    assert_eq!(charges.fee, 190);
    assert_eq!(charges.surcharge, 0);
}

#[test]
fn test_distance_exceeded() {
    let specs = DeliverySpecs {
        order_minimum_no_surcharge: 1000.0,
        base_price: 200.0,
        distance_ranges: vec![
            DistanceRange::new(0.0, 1000.0, 50.0, 12.0),
            DistanceRange::new(1000.0, 2000.0, 100.0, 15.0),
            DistanceRange::new(2000.0, 0.0, 0.0, 0.0),
        ],
    };

    assert_eq!(
        evaluate(1200, 4000, &specs),
        Err(PricingError::DistanceExceeded { distance: 4000 })
    );
}

#[test]
fn test_first_matching_range_wins() {
    // Overlapping ranges are not rejected; the earlier one is used
    let ranges = vec![
        DistanceRange::new(0.0, 1000.0, 10.0, 0.0),
        DistanceRange::new(0.0, 1000.0, 20.0, 0.0),
        DistanceRange::new(1000.0, 0.0, 0.0, 0.0),
    ];

    let range = matching_range(&ranges, 300).unwrap();
    assert_eq!(range.a, 10.0);
}

#[test]
fn test_last_range_is_never_matched() {
    // A real-looking final band is still treated as the terminator
    let ranges = vec![
        DistanceRange::new(0.0, 500.0, 0.0, 0.0),
        DistanceRange::new(500.0, 5000.0, 100.0, 0.0),
    ];

    assert!(matching_range(&ranges, 100).is_some());
    assert!(matching_range(&ranges, 1000).is_none());
}

#[test]
fn test_surcharge_monotonic_in_cart_value() {
    let specs = helsinki_specs();
    let mut previous = i64::MAX;

    for cart_value in (0..=1500).step_by(50) {
        let surcharge = evaluate(cart_value, 177, &specs).unwrap().surcharge;
        assert!(surcharge <= previous, "surcharge grew at cart_value {}", cart_value);
        if cart_value >= 1000 {
            assert_eq!(surcharge, 0);
        }
        previous = surcharge;
    }
}

#[test]
fn test_surcharge_is_difference_to_minimum() {
    assert_eq!(small_order_surcharge(1000.0, 0), 1000);
    assert_eq!(small_order_surcharge(1000.0, 999), 1);
    assert_eq!(small_order_surcharge(1000.0, 1000), 0);
}
