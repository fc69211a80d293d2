//! Merge busy periods and compute free slots.
//!
//! Sorts busy intervals by start, merges overlapping or touching runs into a
//! minimal timeline, then walks that timeline with a cursor to find the gaps
//! inside the query window that are at least as long as the meeting.

use crate::error::{PlannerError, Result};
use crate::interval::Interval;

/// A validated slot query: meeting duration plus search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    duration: i64,
    window_start: i64,
    window_end: i64,
}

impl SlotQuery {
    /// Validate a query. The duration is checked before the window.
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidDuration` if `duration <= 0`.
    /// Returns `PlannerError::InvalidWindow` if `window_start >= window_end`.
    pub fn new(duration: i64, window_start: i64, window_end: i64) -> Result<Self> {
        if duration <= 0 {
            return Err(PlannerError::InvalidDuration(duration));
        }
        if window_start >= window_end {
            return Err(PlannerError::InvalidWindow {
                start: window_start,
                end: window_end,
            });
        }
        Ok(Self {
            duration,
            window_start,
            window_end,
        })
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn window_start(&self) -> i64 {
        self.window_start
    }

    pub fn window_end(&self) -> i64 {
        self.window_end
    }

    /// The `[start, end)` gap, if it is long enough to hold the meeting.
    fn fit(&self, start: i64, end: i64) -> Option<Interval> {
        // `duration > 0`, so the cast is lossless; `abs_diff` cannot overflow.
        (start < end && end.abs_diff(start) >= self.duration as u64)
            .then(|| Interval::from_ordered(start, end))
    }
}

/// Merge overlapping or touching busy periods.
///
/// Returns a sorted list with no two intervals overlapping or touching. Nothing
/// is clipped; intervals outside any window are kept.
pub fn merge_busy_periods(busy: &[Interval]) -> Vec<Interval> {
    let mut sorted = busy.to_vec();
    // Ties do not matter: equal starts always merge.
    sorted.sort_unstable_by_key(|interval| interval.start());

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            // `<=` so touching intervals merge and no zero-width gap survives.
            if interval.start() <= last.end() {
                *last = last.with_end(last.end().max(interval.end()));
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// Find every free slot inside the query window, given a flat list of busy
/// intervals from any number of people.
///
/// Returns slots sorted by start, each at least `query.duration()` long. An
/// empty result means the window is covered or every gap is too short.
pub fn find_free_slots(busy: &[Interval], query: &SlotQuery) -> Vec<Interval> {
    if busy.is_empty() {
        return query
            .fit(query.window_start, query.window_end)
            .into_iter()
            .collect();
    }

    let merged = merge_busy_periods(busy);

    let mut slots = Vec::new();
    let mut cursor = query.window_start;

    for interval in &merged {
        if interval.end() <= query.window_start {
            continue;
        }
        if interval.start() >= query.window_end {
            break;
        }
        if cursor < interval.start() {
            let gap_end = interval.start().min(query.window_end);
            slots.extend(query.fit(cursor, gap_end));
        }
        cursor = cursor.max(interval.end());
    }

    // Trailing gap after the last relevant busy period.
    slots.extend(query.fit(cursor, query.window_end));

    tracing::debug!(
        busy = busy.len(),
        merged = merged.len(),
        slots = slots.len(),
        "computed free slots"
    );

    slots
}

/// Find the earliest free slot inside the query window.
///
/// Delegates to [`find_free_slots`].
pub fn find_first_free_slot(busy: &[Interval], query: &SlotQuery) -> Option<Interval> {
    find_free_slots(busy, query).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn merge_joins_touching_and_nested() {
        let merged = merge_busy_periods(&[iv(20, 30), iv(10, 20), iv(12, 15), iv(40, 50)]);
        assert_eq!(merged, vec![iv(10, 30), iv(40, 50)]);
    }

    #[test]
    fn merge_of_nothing_is_nothing() {
        assert!(merge_busy_periods(&[]).is_empty());
    }

    #[test]
    fn query_checks_duration_before_window() {
        assert_eq!(
            SlotQuery::new(0, 20, 5),
            Err(PlannerError::InvalidDuration(0))
        );
        assert_eq!(
            SlotQuery::new(10, 20, 5),
            Err(PlannerError::InvalidWindow { start: 20, end: 5 })
        );
    }
}
