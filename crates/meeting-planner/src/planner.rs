//! `MeetingPlanner`, the query surface over registered participants.
//!
//! The planner borrows its participants, so the borrow checker rules out
//! adding busy time to a participant while it is registered with a live
//! planner. Shared `&MeetingPlanner` queries are read-only and can run from
//! several threads at once.

use crate::error::Result;
use crate::freebusy::{self, SlotQuery};
use crate::interval::Interval;
use crate::participant::Participant;

/// Registered participants, in registration order.
///
/// Duplicate ids are accepted; every registered participant contributes its
/// busy intervals.
#[derive(Debug, Clone, Default)]
pub struct MeetingPlanner<'a> {
    participants: Vec<&'a Participant>,
}

impl<'a> MeetingPlanner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_participant(&mut self, participant: &'a Participant) {
        tracing::trace!(
            id = participant.id(),
            name = participant.name(),
            busy = participant.busy_intervals().len(),
            "participant registered"
        );
        self.participants.push(participant);
    }

    pub fn participants(&self) -> &[&'a Participant] {
        &self.participants
    }

    /// All busy intervals of all participants, identity dropped.
    fn all_busy(&self) -> Vec<Interval> {
        self.participants
            .iter()
            .flat_map(|p| p.busy_intervals().iter().copied())
            .collect()
    }

    /// The merged busy timeline across every registered participant.
    pub fn merged_busy(&self) -> Vec<Interval> {
        freebusy::merge_busy_periods(&self.all_busy())
    }

    /// Find every slot of at least `duration` inside `[window_start, window_end]`
    /// during which nobody is busy.
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidDuration` if `duration <= 0`.
    /// Returns `PlannerError::InvalidWindow` if `window_start >= window_end`.
    pub fn find_available_slots(
        &self,
        duration: i64,
        window_start: i64,
        window_end: i64,
    ) -> Result<Vec<Interval>> {
        let query = SlotQuery::new(duration, window_start, window_end)?;
        Ok(freebusy::find_free_slots(&self.all_busy(), &query))
    }

    /// Find the earliest slot of at least `duration` inside the window.
    ///
    /// Validation is identical to [`MeetingPlanner::find_available_slots`].
    pub fn find_first_slot(
        &self,
        duration: i64,
        window_start: i64,
        window_end: i64,
    ) -> Result<Option<Interval>> {
        let query = SlotQuery::new(duration, window_start, window_end)?;
        Ok(freebusy::find_first_free_slot(&self.all_busy(), &query))
    }
}
