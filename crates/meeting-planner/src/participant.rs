//! A person and their busy intervals.

use crate::error::Result;
use crate::interval::Interval;

/// A participant: immutable id and name, plus busy intervals in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: i64,
    name: String,
    busy: Vec<Interval>,
}

impl Participant {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            busy: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a busy interval.
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidInterval` if `start >= end`; nothing is
    /// appended in that case.
    pub fn add_busy_interval(&mut self, start: i64, end: i64) -> Result<()> {
        let interval = Interval::new(start, end)?;
        tracing::trace!(participant = self.id, %interval, "busy interval added");
        self.busy.push(interval);
        Ok(())
    }

    /// Busy intervals in the order they were added.
    pub fn busy_intervals(&self) -> &[Interval] {
        &self.busy
    }
}
