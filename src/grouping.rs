//! Calendar-day grouping of activities.
//!
//! Partitions a flat activity list into per-day buckets, expanding
//! multi-day accommodation stays across their whole date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::traits::Activity;

/// The activities assigned to one calendar date, in display order:
/// accommodation first, then name ascending.
#[derive(Debug, Clone)]
pub struct DayBucket<'a, A: Activity> {
    pub date: NaiveDate,
    pub activities: Vec<&'a A>,
}

impl<'a, A: Activity> DayBucket<'a, A> {
    /// Informational view of the day sorted by priority, highest first.
    ///
    /// Priority never feeds optimization; this exists for display only.
    pub fn by_priority(&self) -> Vec<&'a A> {
        let mut sorted = self.activities.clone();
        sorted.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.name().cmp(b.name()))
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Partition activities into day buckets, ascending by date.
///
/// An accommodation stay spanning `[d0, d1]` lands in every bucket of the
/// inclusive range, once per date; everything else lands in the single
/// bucket for its start date. Duplicate ids per date are skipped, so
/// grouping an already-expanded list again yields the same membership.
/// An activity with neither a start nor an end date cannot be placed and
/// is dropped with a warning.
pub fn group<'a, A: Activity>(activities: &'a [A]) -> Vec<DayBucket<'a, A>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&'a A>> = BTreeMap::new();

    for activity in activities {
        let Some(anchor) = activity.start_date().or_else(|| activity.end_date()) else {
            warn!(activity = activity.name(), "activity has no usable date, skipping");
            continue;
        };

        let end = match activity.end_date() {
            Some(end) if end < anchor => {
                warn!(
                    activity = activity.name(),
                    "end date precedes start date, treating as single-day"
                );
                anchor
            }
            Some(end) => end,
            None => anchor,
        };

        if activity.category().is_accommodation() && end > anchor {
            let mut date = anchor;
            loop {
                push_unique(buckets.entry(date).or_default(), activity);
                if date == end {
                    break;
                }
                match date.succ_opt() {
                    Some(next) => date = next,
                    None => break,
                }
            }
        } else {
            push_unique(buckets.entry(anchor).or_default(), activity);
        }
    }

    buckets
        .into_iter()
        .map(|(date, mut activities)| {
            activities.sort_by(|a, b| {
                b.category()
                    .is_accommodation()
                    .cmp(&a.category().is_accommodation())
                    .then_with(|| a.name().cmp(b.name()))
            });
            DayBucket { date, activities }
        })
        .collect()
}

fn push_unique<'a, A: Activity>(bucket: &mut Vec<&'a A>, activity: &'a A) {
    if bucket.iter().any(|existing| existing.id() == activity.id()) {
        return;
    }
    bucket.push(activity);
}
