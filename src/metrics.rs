//! Per-day and trip-wide travel statistics.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grouping::DayBucket;
use crate::traits::{Activity, TravelEstimator, TravelMode};

pub const DEFAULT_FUEL_CONSUMPTION_PER_100KM: f64 = 9.0;
pub const DEFAULT_FUEL_PRICE_PER_UNIT: f64 = 1.65;

/// Fuel parameters for travel-cost estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub fuel_consumption_per_100km: f64,
    pub fuel_price_per_unit: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            fuel_consumption_per_100km: DEFAULT_FUEL_CONSUMPTION_PER_100KM,
            fuel_price_per_unit: DEFAULT_FUEL_PRICE_PER_UNIT,
        }
    }
}

/// Travel totals for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMetrics {
    pub date: NaiveDate,
    pub distance_km: f64,
    pub travel_minutes: i32,
    pub travel_cost: f64,
}

/// Trip-wide travel totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TripTotals {
    pub distance_km: f64,
    pub travel_minutes: i32,
    pub travel_cost: f64,
}

/// Per-day metrics plus trip totals, recomputed fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripMetrics {
    pub days: Vec<DayMetrics>,
    pub totals: TripTotals,
}

/// Compute travel metrics across day buckets.
///
/// Per day: driving-mode, road-corrected sums over consecutive in-bucket
/// pairs, plus the leg from the previous day's last activity to this
/// day's first (cross-day travel is charged to the later day). Days with
/// fewer than two activities contribute no within-day travel. Missing
/// coordinates contribute fallback minutes and zero kilometers.
pub fn aggregate<'a, A, E>(
    buckets: &[DayBucket<'a, A>],
    estimator: &E,
    vehicle: Option<&VehicleConfig>,
) -> TripMetrics
where
    A: Activity + Sync,
    E: TravelEstimator + Sync,
{
    let vehicle = vehicle.copied().unwrap_or_default();

    // The only cross-day coupling is the previous day's last stop, so
    // resolve those pointers up front and let the per-day pass run in
    // parallel without changing its output.
    let mut prev_lasts: Vec<Option<&'a A>> = Vec::with_capacity(buckets.len());
    let mut last_seen: Option<&'a A> = None;
    for bucket in buckets {
        prev_lasts.push(last_seen);
        if let Some(last) = bucket.activities.last() {
            last_seen = Some(*last);
        }
    }

    let days: Vec<DayMetrics> = buckets
        .par_iter()
        .zip(prev_lasts.par_iter())
        .map(|(bucket, prev_last)| day_metrics(bucket, *prev_last, estimator, &vehicle))
        .collect();

    let totals = TripTotals {
        distance_km: days.iter().map(|d| d.distance_km).sum(),
        travel_minutes: days.iter().map(|d| d.travel_minutes).sum(),
        travel_cost: days.iter().map(|d| d.travel_cost).sum(),
    };

    TripMetrics { days, totals }
}

fn day_metrics<'a, A, E>(
    bucket: &DayBucket<'a, A>,
    prev_last: Option<&'a A>,
    estimator: &E,
    vehicle: &VehicleConfig,
) -> DayMetrics
where
    A: Activity,
    E: TravelEstimator,
{
    let mut distance_km = 0.0;
    let mut travel_minutes = 0;

    if let (Some(prev), Some(first)) = (prev_last, bucket.activities.first()) {
        distance_km += estimator.driving_distance_km(prev.coordinates(), first.coordinates());
        travel_minutes +=
            estimator.travel_minutes(prev.coordinates(), first.coordinates(), TravelMode::Driving);
    }

    for pair in bucket.activities.windows(2) {
        distance_km += estimator.driving_distance_km(pair[0].coordinates(), pair[1].coordinates());
        travel_minutes += estimator.travel_minutes(
            pair[0].coordinates(),
            pair[1].coordinates(),
            TravelMode::Driving,
        );
    }

    DayMetrics {
        date: bucket.date,
        distance_km,
        travel_minutes,
        travel_cost: distance_km / 100.0
            * vehicle.fuel_consumption_per_100km
            * vehicle.fuel_price_per_unit,
    }
}
