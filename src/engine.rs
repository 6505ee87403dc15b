//! Itinerary engine entry points.
//!
//! Two library-surface operations over a snapshot of activity data:
//! [`optimize`] builds a full [`OptimizationReport`], [`build_timeline`]
//! builds a read-only [`Timeline`] that reflects activities as stored.
//! Both are pure and stateless; callers wanting debounce or cancellation
//! wrap invocations in their own scheduling layer.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflicts::{self, ConflictRecord};
use crate::grouping::{self, DayBucket};
use crate::metrics::{self, DayMetrics, TripMetrics, TripTotals, VehicleConfig};
use crate::optimizer;
use crate::suggestions::{self, DayTravelSums, Suggestion};
use crate::traits::{Activity, TravelEstimator};

/// Trip-level optimization toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationSettings {
    /// Reorder each day's activities by proximity. When off, optimized
    /// order equals stored order.
    pub prioritize_proximity: bool,
    /// Reserved; not yet consulted by any computation.
    pub respect_opening_hours: bool,
    /// Daily activity budget in hours, fed to split-day suggestions.
    pub max_daily_hours: u32,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            prioritize_proximity: true,
            respect_opening_hours: false,
            max_daily_hours: 10,
        }
    }
}

/// One day's activity ordering, by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOrder<Id> {
    pub date: NaiveDate,
    pub activity_ids: Vec<Id>,
}

/// Headline numbers for an optimization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Improvements {
    /// Total travel-time reduction claimed by reorder suggestions.
    pub travel_minutes_saved: i32,
    /// Scheduling conflicts surfaced with an accompanying suggestion.
    pub conflicts_resolved: usize,
    /// Saved travel time as a percentage of the original total.
    pub efficiency_gain_pct: f64,
}

/// Result of a full optimization pass.
///
/// `optimized_order` is a per-day permutation of `original_order`,
/// produced by a greedy nearest-neighbor heuristic. It is an
/// approximation: callers must not assume globally optimal routing.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport<Id> {
    pub original_order: Vec<DayOrder<Id>>,
    pub optimized_order: Vec<DayOrder<Id>>,
    pub improvements: Improvements,
    pub suggestions: Vec<Suggestion<Id>>,
    /// Travel metrics over the optimized ordering.
    pub metrics: TripMetrics,
}

/// One day of the read-only timeline.
#[derive(Clone)]
pub struct TimelineDay<'a, A: Activity> {
    pub bucket: DayBucket<'a, A>,
    pub metrics: DayMetrics,
    pub conflicts: Vec<ConflictRecord<A::Id>>,
}

/// Day buckets with attached metrics and conflicts, in stored order.
///
/// Carries no suggestions and performs no reordering; what the caller
/// displays (conflicts, costs, both) is the caller's choice.
#[derive(Clone)]
pub struct Timeline<'a, A: Activity> {
    pub days: Vec<TimelineDay<'a, A>>,
    pub totals: TripTotals,
}

struct DayPlan<'a, A: Activity> {
    date: NaiveDate,
    original: Vec<&'a A>,
    optimized: Vec<&'a A>,
    conflicts: Vec<ConflictRecord<A::Id>>,
    sums: DayTravelSums,
    suggestions: Vec<Suggestion<A::Id>>,
}

/// Run a full optimization pass: group, optimize each day, suggest,
/// aggregate.
///
/// Every input, however degenerate, produces a defined output; an empty
/// activity list yields an empty report with zeroed improvements.
pub fn optimize<'a, A, E>(
    activities: &'a [A],
    estimator: &E,
    settings: &OptimizationSettings,
    vehicle: Option<&VehicleConfig>,
) -> OptimizationReport<A::Id>
where
    A: Activity + Sync,
    A::Id: Send,
    E: TravelEstimator + Sync,
{
    let buckets = grouping::group(activities);
    debug!(
        activities = activities.len(),
        days = buckets.len(),
        "grouped itinerary"
    );

    // Days are independent; merge order is preserved by the indexed
    // collect, so parallel output matches sequential output.
    let plans: Vec<DayPlan<'a, A>> = buckets
        .into_par_iter()
        .map(|bucket| plan_day(bucket, estimator, settings))
        .collect();

    let travel_minutes_saved: i32 = plans
        .iter()
        .map(|p| (p.sums.original_minutes - p.sums.optimized_minutes).max(0))
        .sum();
    let total_original: i32 = plans.iter().map(|p| p.sums.original_minutes).sum();
    let improvements = Improvements {
        travel_minutes_saved,
        conflicts_resolved: plans.iter().map(|p| p.conflicts.len()).sum(),
        efficiency_gain_pct: if total_original > 0 {
            f64::from(travel_minutes_saved) / f64::from(total_original) * 100.0
        } else {
            0.0
        },
    };

    let optimized_buckets: Vec<DayBucket<'a, A>> = plans
        .iter()
        .map(|p| DayBucket {
            date: p.date,
            activities: p.optimized.clone(),
        })
        .collect();
    let trip_metrics = metrics::aggregate(&optimized_buckets, estimator, vehicle);

    let original_order = plans.iter().map(|p| day_order(p.date, &p.original)).collect();
    let optimized_order = plans.iter().map(|p| day_order(p.date, &p.optimized)).collect();
    let suggestions: Vec<Suggestion<A::Id>> =
        plans.into_iter().flat_map(|p| p.suggestions).collect();

    debug!(
        suggestions = suggestions.len(),
        minutes_saved = improvements.travel_minutes_saved,
        "optimization pass complete"
    );

    OptimizationReport {
        original_order,
        optimized_order,
        improvements,
        suggestions,
        metrics: trip_metrics,
    }
}

/// Build the read-only timeline: day buckets in stored order with
/// per-day metrics and conflicts attached.
pub fn build_timeline<'a, A, E>(
    activities: &'a [A],
    estimator: &E,
    vehicle: Option<&VehicleConfig>,
) -> Timeline<'a, A>
where
    A: Activity + Sync,
    A::Id: Send,
    E: TravelEstimator + Sync,
{
    let buckets = grouping::group(activities);
    let day_conflicts: Vec<Vec<ConflictRecord<A::Id>>> = buckets
        .par_iter()
        .map(|bucket| conflicts::detect(bucket))
        .collect();
    let TripMetrics { days: day_metrics, totals } =
        metrics::aggregate(&buckets, estimator, vehicle);

    debug!(
        days = buckets.len(),
        total_km = totals.distance_km,
        "timeline built"
    );

    let days = buckets
        .into_iter()
        .zip(day_metrics)
        .zip(day_conflicts)
        .map(|((bucket, metrics), conflicts)| TimelineDay {
            bucket,
            metrics,
            conflicts,
        })
        .collect();

    Timeline { days, totals }
}

fn plan_day<'a, A, E>(
    bucket: DayBucket<'a, A>,
    estimator: &E,
    settings: &OptimizationSettings,
) -> DayPlan<'a, A>
where
    A: Activity,
    E: TravelEstimator,
{
    let conflicts = conflicts::detect(&bucket);

    let optimized = if settings.prioritize_proximity {
        optimizer::optimize_day(&bucket, estimator)
    } else {
        bucket.activities.clone()
    };

    let sums = DayTravelSums {
        original_minutes: optimizer::route_travel_minutes(&bucket.activities, estimator),
        optimized_minutes: optimizer::route_travel_minutes(&optimized, estimator),
    };

    let suggestions = suggestions::suggest_day(
        bucket.date,
        &bucket.activities,
        &optimized,
        &sums,
        &conflicts,
        estimator,
        settings,
    );

    DayPlan {
        date: bucket.date,
        original: bucket.activities,
        optimized,
        conflicts,
        sums,
        suggestions,
    }
}

fn day_order<A: Activity>(date: NaiveDate, order: &[&A]) -> DayOrder<A::Id> {
    DayOrder {
        date,
        activity_ids: order.iter().map(|a| (*a).id().clone()).collect(),
    }
}
