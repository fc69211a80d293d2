//! # meeting-planner
//!
//! Common free-time slots for a group of people.
//!
//! Every participant contributes a list of busy intervals. The planner flattens
//! them, merges overlapping and touching runs into a single busy timeline, then
//! scans that timeline against a search window to report the gaps that are long
//! enough for the requested meeting.
//!
//! Times are opaque ordered integers (minutes since epoch, slot indices, ...);
//! the caller picks the unit.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_planner::{Interval, MeetingPlanner, Participant};
//!
//! let mut alice = Participant::new(1, "Alice");
//! alice.add_busy_interval(0, 30).unwrap();
//! let mut bob = Participant::new(2, "Bob");
//! bob.add_busy_interval(25, 60).unwrap();
//!
//! let mut planner = MeetingPlanner::new();
//! planner.add_participant(&alice);
//! planner.add_participant(&bob);
//!
//! let slots = planner.find_available_slots(30, 0, 100).unwrap();
//! assert_eq!(slots, vec![Interval::new(60, 100).unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`]: The `Interval` value type
//! - [`participant`]: A person and their busy intervals
//! - [`freebusy`]: Merge busy periods and compute free slots
//! - [`planner`]: `MeetingPlanner`, the query surface over registered participants
//! - [`error`]: Error types

pub mod error;
pub mod freebusy;
pub mod interval;
pub mod participant;
pub mod planner;

pub use error::PlannerError;
pub use freebusy::{find_first_free_slot, find_free_slots, merge_busy_periods, SlotQuery};
pub use interval::Interval;
pub use participant::Participant;
pub use planner::MeetingPlanner;
