//! Travel time estimation from road distance
//!
//! Uses average speeds per distance band plus a flat allowance for traffic
//! and stops. Bands are checked from the longest down; the first whose
//! threshold the distance exceeds wins.

use crate::models::TimeEstimate;
use crate::{QuoteError, Result};

struct SpeedBand {
    /// Band applies when road distance is strictly greater than this
    above_km: f64,
    speed_kmh: f64,
    padding_minutes: u32,
}

/// Upper bound on accepted road distance, above the longest estimator output
/// (half the Earth's circumference with the long-trip factor)
pub const MAX_ROAD_KM: f64 = 50_000.0;

static SPEED_BANDS: [SpeedBand; 4] = [
    SpeedBand {
        above_km: 400.0,
        speed_kmh: 112.0,
        padding_minutes: 25,
    },
    SpeedBand {
        above_km: 100.0,
        speed_kmh: 90.0,
        padding_minutes: 20,
    },
    SpeedBand {
        above_km: 20.0,
        speed_kmh: 75.0,
        padding_minutes: 10,
    },
    SpeedBand {
        above_km: f64::NEG_INFINITY,
        speed_kmh: 60.0,
        padding_minutes: 10,
    },
];

pub struct TravelTimeEstimator;

impl TravelTimeEstimator {
    /// Estimate travel time for a road distance in kilometres
    pub fn estimate(road_km: f64) -> Result<TimeEstimate> {
        if !road_km.is_finite() || road_km < 0.0 {
            return Err(QuoteError::invalid_input(format!(
                "road distance must be a non-negative number of kilometres, got {road_km}"
            )));
        }
        if road_km > MAX_ROAD_KM {
            return Err(QuoteError::invalid_input(format!(
                "road distance {road_km} km exceeds the {MAX_ROAD_KM} km limit"
            )));
        }

        let band = SPEED_BANDS
            .iter()
            .find(|band| road_km > band.above_km)
            .unwrap_or(&SPEED_BANDS[SPEED_BANDS.len() - 1]);

        let driving_minutes = (road_km / band.speed_kmh * 60.0).round() as u32;
        let total_minutes = driving_minutes + band.padding_minutes;

        Ok(TimeEstimate {
            total_minutes,
            formatted: format_duration(total_minutes),
        })
    }
}

fn format_duration(total_minutes: u32) -> String {
    if total_minutes > 60 {
        format!("{}h {}m", total_minutes / 60, total_minutes % 60)
    } else {
        format!("{total_minutes} mins")
    }
}
