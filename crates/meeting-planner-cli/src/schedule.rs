//! JSON schedule documents.
//!
//! The document is deserialized into plain DTOs first, then every busy interval
//! goes through `Participant::add_busy_interval` so malformed input fails the
//! same way a library caller would.

use anyhow::{Context, Result};
use meeting_planner::Participant;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct ScheduleInput {
    participants: Vec<ParticipantInput>,
}

#[derive(Deserialize)]
struct ParticipantInput {
    id: i64,
    name: String,
    #[serde(default)]
    busy: Vec<IntervalInput>,
}

#[derive(Deserialize)]
struct IntervalInput {
    start: i64,
    end: i64,
}

/// One row of `meeting-planner participants` output.
#[derive(Serialize)]
pub struct ParticipantSummary<'a> {
    pub id: i64,
    pub name: &'a str,
    pub busy_count: usize,
}

impl<'a> From<&'a Participant> for ParticipantSummary<'a> {
    fn from(p: &'a Participant) -> Self {
        Self {
            id: p.id(),
            name: p.name(),
            busy_count: p.busy_intervals().len(),
        }
    }
}

/// Parse a schedule document into participants, in document order.
pub fn parse_participants(json: &str) -> Result<Vec<Participant>> {
    let input: ScheduleInput =
        serde_json::from_str(json).context("Failed to parse schedule JSON")?;

    input
        .participants
        .into_iter()
        .map(|p| {
            let mut participant = Participant::new(p.id, p.name);
            for interval in p.busy {
                participant
                    .add_busy_interval(interval.start, interval.end)
                    .with_context(|| {
                        format!(
                            "Participant {} ({}) has an invalid busy interval",
                            participant.id(),
                            participant.name()
                        )
                    })?;
            }
            Ok(participant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_defaults_to_empty() {
        let participants =
            parse_participants(r#"{"participants":[{"id":3,"name":"Carol"}]}"#).unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].id(), 3);
        assert!(participants[0].busy_intervals().is_empty());
    }

    #[test]
    fn invalid_interval_names_the_participant() {
        let err = parse_participants(
            r#"{"participants":[{"id":1,"name":"Alice","busy":[{"start":5,"end":5}]}]}"#,
        )
        .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Participant 1 (Alice)"), "{message}");
        assert!(message.contains("Invalid interval"), "{message}");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_participants("{not json").is_err());
        assert!(parse_participants(r#"{"people":[]}"#).is_err());
    }
}
