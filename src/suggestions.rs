//! Human-actionable improvement suggestions for a planned day.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::conflicts::ConflictRecord;
use crate::engine::OptimizationSettings;
use crate::traits::{Activity, TravelEstimator, TravelMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Reorder,
    TimeAdjustment,
    SplitDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A single ranked improvement item.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion<Id> {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub affected_activity_ids: Vec<Id>,
    pub impact: Impact,
    pub time_saved_minutes: Option<i32>,
}

/// Precomputed driving-time totals for one day's original and optimized
/// orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTravelSums {
    pub original_minutes: i32,
    pub optimized_minutes: i32,
}

/// Produce the suggestions for one day.
///
/// Three independent rules, none conditional on another's output:
/// a reorder when the optimized order strictly beats the original on
/// travel time, a time adjustment for every scheduled pair without enough
/// travel slack between them, and a day split when the day's total
/// scheduled load exceeds the configured budget. Time adjustments are
/// computed from scheduled clock times, not from route order.
pub fn suggest_day<'a, A, E>(
    date: NaiveDate,
    original: &[&'a A],
    optimized: &[&'a A],
    sums: &DayTravelSums,
    conflicts: &[ConflictRecord<A::Id>],
    estimator: &E,
    settings: &OptimizationSettings,
) -> Vec<Suggestion<A::Id>>
where
    A: Activity,
    E: TravelEstimator,
{
    let mut suggestions = Vec::new();

    if sums.optimized_minutes < sums.original_minutes {
        let saved = sums.original_minutes - sums.optimized_minutes;
        let around = optimized
            .first()
            .map(|a| a.location_name())
            .filter(|name| !name.is_empty());
        let description = match around {
            Some(place) => format!(
                "Visiting the {} stops around {} in proximity order cuts travel by about {} minutes.",
                optimized.len(),
                place,
                saved
            ),
            None => format!(
                "Visiting the {} stops in proximity order cuts travel by about {} minutes.",
                optimized.len(),
                saved
            ),
        };
        suggestions.push(Suggestion {
            kind: SuggestionKind::Reorder,
            title: format!("Reorder activities on {}", date.format("%Y-%m-%d")),
            description,
            affected_activity_ids: optimized.iter().map(|a| a.id().clone()).collect(),
            impact: Impact::High,
            time_saved_minutes: Some(saved),
        });
    }

    suggestions.extend(time_adjustments(original, conflicts, estimator));

    let total_minutes: i64 = original.iter().map(|a| i64::from(a.duration_minutes())).sum();
    let budget_minutes = i64::from(settings.max_daily_hours) * 60;
    if total_minutes > budget_minutes {
        suggestions.push(Suggestion {
            kind: SuggestionKind::SplitDay,
            title: format!("Lighten {}", date.format("%Y-%m-%d")),
            description: format!(
                "This day holds {:.1} hours of activities against a {} hour budget. Consider moving some to another day.",
                total_minutes as f64 / 60.0,
                settings.max_daily_hours
            ),
            affected_activity_ids: original.iter().map(|a| a.id().clone()).collect(),
            impact: Impact::High,
            time_saved_minutes: None,
        });
    }

    suggestions
}

/// Walk the day's time-sorted activities pairwise and flag every pair
/// without enough slack for the travel leg between them.
fn time_adjustments<'a, A, E>(
    original: &[&'a A],
    conflicts: &[ConflictRecord<A::Id>],
    estimator: &E,
) -> Vec<Suggestion<A::Id>>
where
    A: Activity,
    E: TravelEstimator,
{
    let mut timed: Vec<(&'a A, NaiveTime, NaiveTime)> = original
        .iter()
        .filter_map(|activity| match (activity.start_time(), activity.end_time()) {
            (Some(start), Some(end)) => Some((*activity, start, end)),
            _ => None,
        })
        .collect();
    timed.sort_by_key(|(_, start, _)| *start);

    let mut suggestions = Vec::new();
    for pair in timed.windows(2) {
        let (prev, _, prev_end) = pair[0];
        let (next, next_start, _) = pair[1];

        let travel = estimator.travel_minutes(
            prev.coordinates(),
            next.coordinates(),
            TravelMode::Driving,
        );
        let slack = (next_start - prev_end).num_minutes();
        if i64::from(travel) <= slack {
            continue;
        }

        let description = match conflict_overlap(conflicts, prev.id(), next.id()) {
            Some(overlap) => format!(
                "{} overlaps {} by {} minutes. Shift one of them to leave at least {} minutes for travel.",
                prev.name(),
                next.name(),
                overlap,
                travel
            ),
            None => format!(
                "Getting from {} to {} takes about {} minutes but only {} are scheduled.",
                prev.name(),
                next.name(),
                travel,
                slack.max(0)
            ),
        };

        suggestions.push(Suggestion {
            kind: SuggestionKind::TimeAdjustment,
            title: format!("Tight schedule between {} and {}", prev.name(), next.name()),
            description,
            affected_activity_ids: vec![prev.id().clone(), next.id().clone()],
            impact: Impact::Medium,
            time_saved_minutes: None,
        });
    }

    suggestions
}

fn conflict_overlap<Id: PartialEq>(
    conflicts: &[ConflictRecord<Id>],
    a: &Id,
    b: &Id,
) -> Option<i64> {
    conflicts
        .iter()
        .find(|c| (&c.first == a && &c.second == b) || (&c.first == b && &c.second == a))
        .map(|c| c.overlap_minutes)
}
