//! Great-circle distance with a road correction factor

use haversine::{Units, distance};

use crate::models::{Coordinate, DistanceResult};

/// Straight-line distance above which trips are assumed to be mostly highway
const LONG_TRIP_KM: f64 = 100.0;
/// Road detour factor for long trips
const LONG_TRIP_FACTOR: f64 = 1.25;
/// Road detour factor for short trips, which wind through more local roads
const SHORT_TRIP_FACTOR: f64 = 1.35;

pub struct DistanceEstimator;

impl DistanceEstimator {
    /// Estimate straight-line and road distance between two points
    #[must_use]
    pub fn estimate(a: &Coordinate, b: &Coordinate) -> DistanceResult {
        // Fixed argument order keeps the result bit-identical in both directions
        let (from, to) = if (a.latitude(), a.longitude()) <= (b.latitude(), b.longitude()) {
            (*a, *b)
        } else {
            (*b, *a)
        };
        let straight_line_km = distance(from.into(), to.into(), Units::Kilometers);

        let correction_factor = if straight_line_km > LONG_TRIP_KM {
            LONG_TRIP_FACTOR
        } else {
            SHORT_TRIP_FACTOR
        };

        DistanceResult {
            straight_line_km,
            road_km: road_distance(straight_line_km, correction_factor),
            correction_factor,
        }
    }
}

/// Scale and round to one decimal, never dropping below the straight line
fn road_distance(straight_line_km: f64, factor: f64) -> f64 {
    let scaled = straight_line_km * factor * 10.0;
    let rounded = scaled.round() / 10.0;
    if rounded < straight_line_km {
        scaled.ceil() / 10.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const JOHANNESBURG: Coordinate = Coordinate::fixed(-26.2041, 28.0473);
    const DURBAN: Coordinate = Coordinate::fixed(-29.8587, 31.0218);
    const PRETORIA: Coordinate = Coordinate::fixed(-25.7479, 28.1878);
    const SANDTON: Coordinate = Coordinate::fixed(-26.1076, 28.0567);
    const MIDRAND: Coordinate = Coordinate::fixed(-25.9992, 28.1262);
    const CAPE_TOWN: Coordinate = Coordinate::fixed(-33.9249, 18.4232);

    #[test]
    fn test_long_trip_uses_highway_factor() {
        let result = DistanceEstimator::estimate(&JOHANNESBURG, &DURBAN);
        assert!((result.straight_line_km - 500.3).abs() < 0.1);
        assert_eq!(result.correction_factor, 1.25);
        assert_eq!(result.road_km, 625.4);
    }

    #[test]
    fn test_short_trip_uses_local_factor() {
        let result = DistanceEstimator::estimate(&SANDTON, &MIDRAND);
        assert!((result.straight_line_km - 13.9).abs() < 0.1);
        assert_eq!(result.correction_factor, 1.35);
        assert_eq!(result.road_km, 18.8);
    }

    #[test]
    fn test_same_point_is_zero() {
        let result = DistanceEstimator::estimate(&PRETORIA, &PRETORIA);
        assert_eq!(result.straight_line_km, 0.0);
        assert_eq!(result.road_km, 0.0);
        assert_eq!(result.correction_factor, 1.35);
    }

    #[rstest]
    #[case(JOHANNESBURG, DURBAN)]
    #[case(SANDTON, MIDRAND)]
    #[case(CAPE_TOWN, PRETORIA)]
    #[case(Coordinate::fixed(-25.9, 28.1), Coordinate::fixed(-25.9, 28.2))]
    fn test_distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert_eq!(DistanceEstimator::estimate(&a, &b), DistanceEstimator::estimate(&b, &a));
    }

    #[rstest]
    #[case(JOHANNESBURG, CAPE_TOWN)]
    #[case(SANDTON, MIDRAND)]
    #[case(Coordinate::fixed(-25.9278, 28.1223), Coordinate::fixed(-25.9279, 28.1223))]
    #[case(Coordinate::fixed(-25.9278, 28.1223), Coordinate::fixed(-25.9282, 28.1224))]
    fn test_road_never_shorter_than_straight_line(#[case] a: Coordinate, #[case] b: Coordinate) {
        let result = DistanceEstimator::estimate(&a, &b);
        assert!(result.road_km >= result.straight_line_km);
    }

    #[test]
    fn test_out_of_range_points_never_reach_estimator() {
        assert!(Coordinate::new(500.0, 900.0).is_err());
        assert!(Coordinate::new(f64::NAN, 28.0).is_err());

        let north = Coordinate::new(90.0, 180.0).unwrap();
        let south = Coordinate::new(-90.0, -180.0).unwrap();
        let result = DistanceEstimator::estimate(&north, &south);
        assert!(result.road_km.is_finite());
        assert!(result.road_km >= result.straight_line_km);
    }

    #[test]
    fn test_road_distance_rounds_up_tiny_trips() {
        // 0.03 km * 1.35 = 0.0405 would round to 0.0
        assert_eq!(road_distance(0.03, SHORT_TRIP_FACTOR), 0.1);
        assert_eq!(road_distance(10.0, SHORT_TRIP_FACTOR), 13.5);
    }
}
