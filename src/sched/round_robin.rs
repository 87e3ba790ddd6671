//! Round-robin scheduling.
//!
//! A FIFO ready queue of process indices. Each dispatch runs for at
//! most one quantum, one cycle at a time; arrivals are re-checked after
//! every individual cycle so a process arriving mid-slice enters the
//! queue ahead of the currently running process when it is re-enqueued.

use std::collections::VecDeque;

use tracing::debug;

use super::{check_processes, finish, RunOptions};
use crate::error::{Error, Result};
use crate::event::Trace;
use crate::models::{CycleEvent, Process, SimulationResult};

/// Runs the round-robin policy with the given quantum (>= 1).
pub fn run_round_robin(
    processes: &mut [Process],
    quantum: u32,
    options: RunOptions<'_>,
) -> Result<SimulationResult> {
    check_processes(processes)?;
    if quantum == 0 {
        return Err(Error::InvalidParameter(
            "round robin quantum must be >= 1".to_string(),
        ));
    }

    for p in processes.iter_mut() {
        p.remaining_time = p.burst_time;
    }

    let mut trace = Trace::new(options.sink, options.cancel);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut cycle: u32 = 0;
    let mut completed = 0;

    'run: while completed < processes.len() {
        if trace.cancelled() {
            break 'run;
        }
        admit_arrivals(processes, &mut queue, cycle);

        let Some(idx) = queue.pop_front() else {
            trace.emit(CycleEvent::Idle, cycle);
            cycle += 1;
            continue;
        };

        if processes[idx].start_time.is_none() {
            processes[idx].start_time = Some(cycle);
        }
        let slice = quantum.min(processes[idx].remaining_time);
        debug!(pid = %processes[idx].pid, cycle, slice, "rr dispatch");

        for _ in 0..slice {
            if trace.cancelled() {
                break 'run;
            }
            let pid = processes[idx].pid.clone();
            trace.emit(CycleEvent::Busy { pid }, cycle);
            processes[idx].remaining_time -= 1;
            cycle += 1;

            // Mid-slice arrivals queue ahead of the running process
            admit_arrivals(processes, &mut queue, cycle);
        }

        let p = &mut processes[idx];
        if p.remaining_time == 0 {
            p.terminated = true;
            p.queued = false;
            p.turnaround_time = cycle - p.arrival_time;
            p.waiting_time = p.turnaround_time - p.burst_time;
            completed += 1;
        } else {
            queue.push_back(idx);
        }
    }

    Ok(finish(trace, processes, "round_robin"))
}

fn admit_arrivals(processes: &mut [Process], queue: &mut VecDeque<usize>, cycle: u32) {
    for (i, p) in processes.iter_mut().enumerate() {
        if !p.queued && !p.terminated && p.has_arrived(cycle) {
            queue.push_back(i);
            p.queued = true;
        }
    }
}
