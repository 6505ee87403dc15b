//! Proximity-based reordering of a day's activities.
//!
//! Greedy nearest-neighbor route construction. This is a fast
//! approximation, not an exact solver: it can produce long return trips
//! and carries no optimality guarantee.

use crate::grouping::DayBucket;
use crate::traits::{Activity, TravelEstimator, TravelMode};

/// Reorder a day's activities by greedy nearest-neighbor.
///
/// Seeds the route with the bucket's first activity (accommodation-first
/// order from grouping) and repeatedly appends the unvisited activity
/// closest to the route's last stop. Ties keep the earliest original
/// bucket position, so the result is deterministic. Buckets of two or
/// fewer activities are returned unchanged.
pub fn optimize_day<'a, A, E>(bucket: &DayBucket<'a, A>, estimator: &E) -> Vec<&'a A>
where
    A: Activity,
    E: TravelEstimator,
{
    if bucket.activities.len() <= 2 {
        return bucket.activities.clone();
    }

    let mut current = bucket.activities[0];
    let mut route = Vec::with_capacity(bucket.activities.len());
    route.push(current);

    let mut remaining: Vec<&'a A> = bucket.activities[1..].to_vec();
    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_cost = i32::MAX;
        for (index, candidate) in remaining.iter().enumerate() {
            let cost =
                estimator.proximity_minutes(current.coordinates(), candidate.coordinates());
            // Strict comparison keeps the earliest original position on ties.
            if cost < best_cost {
                best_cost = cost;
                best_index = index;
            }
        }
        current = remaining.remove(best_index);
        route.push(current);
    }

    route
}

/// Total driving time across an ordered sequence of stops.
pub fn route_travel_minutes<'a, A, E>(order: &[&'a A], estimator: &E) -> i32
where
    A: Activity,
    E: TravelEstimator,
{
    order
        .windows(2)
        .map(|pair| {
            estimator.travel_minutes(pair[0].coordinates(), pair[1].coordinates(), TravelMode::Driving)
        })
        .sum()
}
