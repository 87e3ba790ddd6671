//! Scheduling engine.
//!
//! Five independent dispatch policies over a mutable process list, each
//! producing a [`SimulationResult`]. Policies are stateless between
//! calls; all run state lives on the processes themselves.
//!
//! # Shared step semantics
//!
//! A cycle advances by exactly one unit per loop iteration (or by a
//! whole burst for run-to-completion policies); every cycle — busy or
//! idle — appends exactly one timeline entry and triggers at most one
//! sink notification. Within a cycle, candidates are examined in
//! original input order, so ties resolve deterministically to the
//! lowest index.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fifo;
mod metrics;
mod priority;
mod round_robin;
mod sjf;
mod srt;

pub use fifo::run_fifo;
pub use metrics::{ProcessMetrics, RunMetrics};
pub use priority::{run_priority, PriorityMode};
pub use round_robin::run_round_robin;
pub use sjf::run_sjf;
pub use srt::run_srt;

pub use crate::event::RunOptions;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::Trace;
use crate::models::{Process, SimulationResult};

/// A scheduling policy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-in-first-out by arrival time, run to completion.
    Fifo,
    /// Shortest job first, non-preemptive.
    Sjf,
    /// Shortest remaining time, preemptive.
    Srt,
    /// Round robin with a fixed time quantum (>= 1).
    RoundRobin {
        /// Maximum cycles granted per dispatch.
        quantum: u32,
    },
    /// Lowest-priority-value-first, non-preemptive.
    Priority {
        /// Whether candidates are gated on arrival time.
        mode: PriorityMode,
    },
}

/// Runs the selected policy over the process list.
pub fn run_policy(
    policy: Policy,
    processes: &mut [Process],
    options: RunOptions<'_>,
) -> Result<SimulationResult> {
    match policy {
        Policy::Fifo => run_fifo(processes, options),
        Policy::Sjf => run_sjf(processes, options),
        Policy::Srt => run_srt(processes, options),
        Policy::RoundRobin { quantum } => run_round_robin(processes, quantum, options),
        Policy::Priority { mode } => run_priority(processes, mode, options),
    }
}

/// Rejects input that would make a run undefined.
pub(crate) fn check_processes(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(Error::EmptyInput("processes"));
    }
    for p in processes {
        if p.burst_time == 0 {
            return Err(Error::InvalidParameter(format!(
                "process '{}' has zero burst time",
                p.pid
            )));
        }
    }
    Ok(())
}

/// Closes out a run: computes averages and assembles the result.
pub(crate) fn finish(
    trace: Trace<'_>,
    processes: &[Process],
    policy: &'static str,
) -> SimulationResult {
    let (avg_waiting_time, avg_turnaround_time) = metrics::averages(processes);
    let timeline = trace.into_timeline();
    debug!(
        policy,
        cycles = timeline.len(),
        avg_waiting_time,
        avg_turnaround_time,
        "run complete"
    );
    SimulationResult {
        timeline,
        avg_waiting_time,
        avg_turnaround_time,
    }
}
