//! Haversine travel estimator.
//!
//! Uses great-circle distance to estimate travel time and distance from
//! coordinates alone, with a fixed road factor to approximate real road
//! routing. Less accurate than a routing API but always available and pure.

use serde::Serialize;

use crate::traits::{TravelEstimator, TravelMode};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Multiplier applied to straight-line distance to approximate road routing.
const ROAD_FACTOR: f64 = 1.4;

/// Fallback travel time when either endpoint lacks coordinates.
const MISSING_COORDS_MINUTES: i32 = 30;

/// Never report less than this between two distinct located points.
const MIN_DRIVING_MINUTES: i32 = 10;

const WALKING_SPEED_KMH: f64 = 5.0;
const TRANSIT_SPEED_KMH: f64 = 25.0;
const TRANSIT_WAIT_MINUTES: i32 = 15;
const FLIGHT_SPEED_KMH: f64 = 800.0;
/// Airport procedures, boarding and taxi time.
const FLIGHT_OVERHEAD_MINUTES: i32 = 120;
/// Flights shorter than this get no airport overhead and are not offered
/// in mode comparisons.
const FLIGHT_MIN_KM: f64 = 100.0;

/// Haversine-based travel estimator.
///
/// Driving time uses a tiered average speed: short hops crawl through
/// city traffic, long hauls cruise at highway speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEstimator;

impl GeoEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate haversine distance between two points in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Tiered average driving speed for a given distance.
    fn driving_speed_kmh(km: f64) -> f64 {
        if km < 5.0 {
            30.0
        } else if km < 50.0 {
            60.0
        } else if km < 200.0 {
            80.0
        } else {
            90.0
        }
    }

    /// Convert a driving distance to minutes using the tiered speed table.
    ///
    /// Identical points cost zero; everything else floors at
    /// [`MIN_DRIVING_MINUTES`].
    fn driving_minutes_for(km: f64) -> i32 {
        if km <= f64::EPSILON {
            return 0;
        }
        let minutes = (km / Self::driving_speed_kmh(km) * 60.0).round() as i32;
        minutes.max(MIN_DRIVING_MINUTES)
    }

    fn minutes_at_speed(km: f64, speed_kmh: f64) -> i32 {
        (km / speed_kmh * 60.0).round() as i32
    }
}

impl TravelEstimator for GeoEstimator {
    fn distance_km(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> f64 {
        match (from, to) {
            (Some(a), Some(b)) => Self::haversine_km(a, b),
            _ => 0.0,
        }
    }

    fn driving_distance_km(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> f64 {
        self.distance_km(from, to) * ROAD_FACTOR
    }

    fn travel_minutes(
        &self,
        from: Option<(f64, f64)>,
        to: Option<(f64, f64)>,
        mode: TravelMode,
    ) -> i32 {
        let (Some(a), Some(b)) = (from, to) else {
            return MISSING_COORDS_MINUTES;
        };
        let km = Self::haversine_km(a, b);
        match mode {
            TravelMode::Driving => Self::driving_minutes_for(km * ROAD_FACTOR),
            TravelMode::Walking => Self::minutes_at_speed(km, WALKING_SPEED_KMH),
            TravelMode::Transit => {
                Self::minutes_at_speed(km, TRANSIT_SPEED_KMH) + TRANSIT_WAIT_MINUTES
            }
            TravelMode::Flight => {
                let cruise = Self::minutes_at_speed(km, FLIGHT_SPEED_KMH);
                if km > FLIGHT_MIN_KM {
                    cruise + FLIGHT_OVERHEAD_MINUTES
                } else {
                    cruise
                }
            }
        }
    }

    fn proximity_minutes(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> i32 {
        let (Some(a), Some(b)) = (from, to) else {
            return MISSING_COORDS_MINUTES;
        };
        Self::driving_minutes_for(Self::haversine_km(a, b))
    }
}

/// One row of a travel-method comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeEstimate {
    pub mode: TravelMode,
    pub minutes: i32,
    pub distance_km: f64,
}

/// Estimate the same leg under every sensible travel mode.
///
/// Flight is omitted for legs of 100 km or less. Each entry is an
/// independent pure function of the leg distance.
pub fn compare_modes<E: TravelEstimator>(
    estimator: &E,
    from: Option<(f64, f64)>,
    to: Option<(f64, f64)>,
) -> Vec<ModeEstimate> {
    let straight_km = estimator.distance_km(from, to);

    let mut estimates = vec![
        ModeEstimate {
            mode: TravelMode::Driving,
            minutes: estimator.travel_minutes(from, to, TravelMode::Driving),
            distance_km: estimator.driving_distance_km(from, to),
        },
        ModeEstimate {
            mode: TravelMode::Walking,
            minutes: estimator.travel_minutes(from, to, TravelMode::Walking),
            distance_km: straight_km,
        },
        ModeEstimate {
            mode: TravelMode::Transit,
            minutes: estimator.travel_minutes(from, to, TravelMode::Transit),
            distance_km: straight_km,
        },
    ];

    if straight_km > FLIGHT_MIN_KM {
        estimates.push(ModeEstimate {
            mode: TravelMode::Flight,
            minutes: estimator.travel_minutes(from, to, TravelMode::Flight),
            distance_km: straight_km,
        });
    }

    estimates
}
