//! Timeline and result models.
//!
//! The engines emit one structured event per occupied slot of logical
//! time. Consumers that want the legacy display strings (Gantt labels)
//! render them via [`CycleEvent::label`] instead of parsing delimited
//! composites.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Operation;

/// What happened during one simulated cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleEvent {
    /// No eligible process / no action fired.
    Idle,
    /// A process held the CPU.
    Busy {
        /// Running process identifier.
        pid: String,
    },
    /// A resource request was granted.
    Access {
        /// Requesting process.
        pid: String,
        /// Resource granted.
        resource: String,
        /// Operation kind (labeling only).
        operation: Operation,
    },
    /// A resource request was denied this cycle (not retried later).
    Wait {
        /// Requesting process.
        pid: String,
        /// Resource contended for.
        resource: String,
        /// Operation kind (labeling only).
        operation: Operation,
    },
}

impl CycleEvent {
    /// Renders the legacy Gantt label for this event.
    ///
    /// Scheduling events render as the pid or `IDLE`; synchronization
    /// events as `pid-operation-resource-STATUS`.
    pub fn label(&self) -> String {
        match self {
            CycleEvent::Idle => "IDLE".to_string(),
            CycleEvent::Busy { pid } => pid.clone(),
            CycleEvent::Access {
                pid,
                resource,
                operation,
            } => format!("{pid}-{operation}-{resource}-ACCESSED"),
            CycleEvent::Wait {
                pid,
                resource,
                operation,
            } => format!("{pid}-{operation}-{resource}-WAITING"),
        }
    }

    /// Whether this event occupies the CPU (scheduling timelines only).
    pub fn is_busy(&self) -> bool {
        matches!(self, CycleEvent::Busy { .. })
    }
}

impl fmt::Display for CycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One timeline slot: an event at a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// What happened.
    pub event: CycleEvent,
    /// When it happened.
    pub cycle: u32,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(event: CycleEvent, cycle: u32) -> Self {
        Self { event, cycle }
    }
}

/// The outcome of one scheduling run.
///
/// The timeline holds exactly one entry per simulated cycle, appended in
/// chronological order; the averages are arithmetic means over all input
/// processes, computed once at the end of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Chronological per-cycle timeline.
    pub timeline: Vec<TimelineEntry>,
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
}

impl SimulationResult {
    /// Number of cycles simulated.
    pub fn cycles(&self) -> usize {
        self.timeline.len()
    }

    /// Renders the timeline as Gantt labels, in cycle order.
    pub fn labels(&self) -> Vec<String> {
        self.timeline.iter().map(|e| e.event.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CycleEvent::Idle.label(), "IDLE");
        assert_eq!(CycleEvent::Busy { pid: "P1".into() }.label(), "P1");
        assert_eq!(
            CycleEvent::Access {
                pid: "P1".into(),
                resource: "R1".into(),
                operation: Operation::Read,
            }
            .label(),
            "P1-READ-R1-ACCESSED"
        );
        assert_eq!(
            CycleEvent::Wait {
                pid: "P2".into(),
                resource: "R1".into(),
                operation: Operation::Write,
            }
            .label(),
            "P2-WRITE-R1-WAITING"
        );
    }

    #[test]
    fn test_is_busy() {
        assert!(CycleEvent::Busy { pid: "P1".into() }.is_busy());
        assert!(!CycleEvent::Idle.is_busy());
    }

    #[test]
    fn test_result_labels() {
        let result = SimulationResult {
            timeline: vec![
                TimelineEntry::new(CycleEvent::Busy { pid: "A".into() }, 0),
                TimelineEntry::new(CycleEvent::Idle, 1),
            ],
            avg_waiting_time: 0.0,
            avg_turnaround_time: 1.0,
        };
        assert_eq!(result.cycles(), 2);
        assert_eq!(result.labels(), vec!["A", "IDLE"]);
    }
}
