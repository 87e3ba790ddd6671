//! Process model.
//!
//! A process is the unit of work dispatched by the scheduling engine:
//! a burst of CPU cycles, an arrival cycle, and a scheduling priority,
//! plus the mutable bookkeeping the engines maintain during a run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// Constructed from input before simulation, mutated in place by the
/// active scheduling policy during its run, and read-only afterward for
/// metrics reporting. All times are in cycles (discrete logical steps).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Total CPU cycles required (> 0).
    pub burst_time: u32,
    /// Cycle at which the process becomes eligible to run.
    pub arrival_time: u32,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// Cycles of burst still outstanding.
    #[serde(default)]
    pub remaining_time: u32,
    /// Cycles spent eligible but not running.
    #[serde(default)]
    pub waiting_time: u32,
    /// Cycles from arrival to completion.
    #[serde(default)]
    pub turnaround_time: u32,
    /// Cycle of first dispatch. `None` until first scheduled.
    #[serde(default)]
    pub start_time: Option<u32>,
    /// Whether the burst has completed.
    #[serde(default)]
    pub terminated: bool,
    /// Whether the process currently sits in the ready queue
    /// (Round Robin only, prevents duplicate enqueue).
    #[serde(default)]
    pub queued: bool,
}

impl Process {
    /// Creates a new process with the given pid and burst time.
    pub fn new(pid: impl Into<String>, burst_time: u32) -> Self {
        Self {
            pid: pid.into(),
            burst_time,
            arrival_time: 0,
            priority: 0,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            start_time: None,
            terminated: false,
            queued: false,
        }
    }

    /// Sets the arrival cycle.
    pub fn with_arrival(mut self, arrival_time: u32) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores the pristine pre-run state so the same input can be
    /// replayed under another policy.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.start_time = None;
        self.terminated = false;
        self.queued = false;
    }

    /// Whether the process has arrived by the given cycle.
    pub fn has_arrived(&self, cycle: u32) -> bool {
        self.arrival_time <= cycle
    }
}
