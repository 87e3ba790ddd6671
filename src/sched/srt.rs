//! Shortest-remaining-time scheduling (preemptive).
//!
//! Every cycle the arrived, unfinished process with the least remaining
//! work runs for exactly one cycle; a newly arrived shorter process
//! preempts at the next cycle boundary. Ties keep the lowest input
//! index.

use tracing::debug;

use super::{check_processes, finish, RunOptions};
use crate::error::Result;
use crate::event::Trace;
use crate::models::{CycleEvent, Process, SimulationResult};

/// Runs the SRT policy.
pub fn run_srt(
    processes: &mut [Process],
    options: RunOptions<'_>,
) -> Result<SimulationResult> {
    check_processes(processes)?;

    for p in processes.iter_mut() {
        p.remaining_time = p.burst_time;
    }

    let mut trace = Trace::new(options.sink, options.cancel);
    let mut cycle: u32 = 0;
    let mut completed = 0;

    while completed < processes.len() {
        if trace.cancelled() {
            break;
        }

        let mut pick: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            if p.terminated || !p.has_arrived(cycle) || p.remaining_time == 0 {
                continue;
            }
            let better = match pick {
                None => true,
                Some(j) => p.remaining_time < processes[j].remaining_time,
            };
            if better {
                pick = Some(i);
            }
        }

        match pick {
            Some(i) => {
                let p = &mut processes[i];
                if p.start_time.is_none() {
                    p.start_time = Some(cycle);
                    debug!(pid = %p.pid, cycle, "srt first dispatch");
                }
                trace.emit(CycleEvent::Busy { pid: p.pid.clone() }, cycle);
                p.remaining_time -= 1;
                cycle += 1;

                if p.remaining_time == 0 {
                    p.terminated = true;
                    p.turnaround_time = cycle - p.arrival_time;
                    p.waiting_time = p.turnaround_time - p.burst_time;
                    completed += 1;
                }
            }
            None => {
                trace.emit(CycleEvent::Idle, cycle);
                cycle += 1;
            }
        }
    }

    Ok(finish(trace, processes, "srt"))
}
