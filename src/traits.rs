//! Core domain traits for the itinerary engine.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models; the engine never owns, mutates,
//! or persists the caller's records.

use std::hash::Hash;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Unique identifier for engine entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Category tag for an activity.
///
/// Only [`Category::Accommodation`] carries scheduling semantics (a stay may
/// span multiple calendar days); the rest are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accommodation,
    Food,
    Sightseeing,
    Activity,
    Transport,
    Shopping,
    Other,
}

impl Category {
    pub fn is_accommodation(self) -> bool {
        matches!(self, Category::Accommodation)
    }
}

/// A single geolocated, time-boxed itinerary entry.
pub trait Activity {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    fn name(&self) -> &str;

    /// Free-text place description (venue, address, city).
    fn location_name(&self) -> &str;

    /// Location coordinates (lat, lng). `None` degrades travel estimates
    /// to a fixed fallback.
    fn coordinates(&self) -> Option<(f64, f64)>;

    fn category(&self) -> Category;

    /// First calendar day of the activity. `None` means the caller could
    /// not parse a date for this record.
    fn start_date(&self) -> Option<NaiveDate>;

    /// Last calendar day, inclusive. `None` disables multi-day expansion
    /// but never drops the activity.
    fn end_date(&self) -> Option<NaiveDate>;

    /// Scheduled start time of day. Activities without both a start and an
    /// end time are excluded from conflict checks.
    fn start_time(&self) -> Option<NaiveTime>;

    fn end_time(&self) -> Option<NaiveTime>;

    /// Scheduled length in minutes, independent of start/end times.
    fn duration_minutes(&self) -> i32;

    /// Informational weight, 1..=5. Never alters optimization order.
    fn priority(&self) -> u8;
}

/// Transport mode for travel estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
    Transit,
    Flight,
}

/// Provides distance and travel-time estimates between coordinate pairs.
///
/// Endpoints are optional; implementations apply the missing-coordinate
/// fallback internally so every caller degrades identically: fixed fallback
/// minutes, and zero distance rather than phantom kilometers.
pub trait TravelEstimator {
    /// Great-circle distance in kilometers; 0.0 when either endpoint is
    /// missing.
    fn distance_km(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> f64;

    /// Road-corrected driving distance in kilometers; 0.0 when either
    /// endpoint is missing.
    fn driving_distance_km(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> f64;

    /// Estimated travel time in minutes for the given mode.
    fn travel_minutes(
        &self,
        from: Option<(f64, f64)>,
        to: Option<(f64, f64)>,
        mode: TravelMode,
    ) -> i32;

    /// Relative-order metric used for nearest-neighbor comparisons.
    ///
    /// Computed from the uncorrected great-circle distance; only the
    /// ordering of values matters, not their absolute scale.
    fn proximity_minutes(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> i32;
}
