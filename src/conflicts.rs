//! Temporal conflict detection within a day.

use chrono::NaiveTime;
use serde::Serialize;

use crate::grouping::DayBucket;
use crate::traits::Activity;

/// A temporal overlap between two scheduled activities on the same date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRecord<Id> {
    /// The earlier-starting activity of the pair.
    pub first: Id,
    pub second: Id,
    pub overlap_minutes: i64,
}

/// Find every overlapping pair of scheduled activities in a bucket.
///
/// Only activities carrying both a start and an end time participate;
/// intervals are half-open, so exactly-adjacent activities do not
/// conflict. Output content is invariant to the bucket's activity order:
/// each record names the earlier-starting activity first. O(n²) over the
/// day, which stays trivial at daily itinerary sizes.
pub fn detect<'a, A: Activity>(bucket: &DayBucket<'a, A>) -> Vec<ConflictRecord<A::Id>> {
    let timed: Vec<(&'a A, NaiveTime, NaiveTime)> = bucket
        .activities
        .iter()
        .filter_map(|activity| match (activity.start_time(), activity.end_time()) {
            (Some(start), Some(end)) if end > start => Some((*activity, start, end)),
            _ => None,
        })
        .collect();

    let mut conflicts = Vec::new();
    for i in 0..timed.len() {
        for j in i + 1..timed.len() {
            let (_, a_start, a_end) = timed[i];
            let (_, b_start, b_end) = timed[j];

            let overlap = (a_end.min(b_end) - a_start.max(b_start)).num_minutes();
            if overlap <= 0 {
                continue;
            }

            // Earlier-starting activity first, so content is stable no
            // matter how the bucket happens to be ordered.
            let (first, second) = if (b_start, b_end) < (a_start, a_end) {
                (timed[j].0, timed[i].0)
            } else {
                (timed[i].0, timed[j].0)
            };

            conflicts.push(ConflictRecord {
                first: first.id().clone(),
                second: second.id().clone(),
                overlap_minutes: overlap,
            });
        }
    }

    conflicts
}
