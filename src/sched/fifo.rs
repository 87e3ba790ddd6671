//! First-in-first-out scheduling.
//!
//! Processes run to completion in arrival order. The sort is stable, so
//! processes arriving at the same cycle keep their original input order.

use tracing::debug;

use super::{check_processes, finish, RunOptions};
use crate::error::Result;
use crate::event::Trace;
use crate::models::{CycleEvent, Process, SimulationResult};

/// Runs the FIFO policy.
///
/// Sorts the slice in place by arrival time, then dispatches each
/// process for its whole burst, filling any gap before an arrival with
/// idle cycles.
pub fn run_fifo(
    processes: &mut [Process],
    options: RunOptions<'_>,
) -> Result<SimulationResult> {
    check_processes(processes)?;
    processes.sort_by_key(|p| p.arrival_time);

    let mut trace = Trace::new(options.sink, options.cancel);
    let mut cycle: u32 = 0;

    'run: for i in 0..processes.len() {
        // Gap before this process arrives
        while cycle < processes[i].arrival_time {
            if trace.cancelled() {
                break 'run;
            }
            trace.emit(CycleEvent::Idle, cycle);
            cycle += 1;
        }
        if trace.cancelled() {
            break 'run;
        }

        let p = &mut processes[i];
        p.waiting_time = cycle - p.arrival_time;
        p.start_time = Some(cycle);
        debug!(pid = %p.pid, cycle, "fifo dispatch");

        for _ in 0..processes[i].burst_time {
            if trace.cancelled() {
                break 'run;
            }
            let pid = processes[i].pid.clone();
            trace.emit(CycleEvent::Busy { pid }, cycle);
            cycle += 1;
        }

        let p = &mut processes[i];
        p.turnaround_time = p.waiting_time + p.burst_time;
        p.remaining_time = 0;
        p.terminated = true;
    }

    Ok(finish(trace, processes, "fifo"))
}
