//! Shortest-job-first scheduling (non-preemptive).
//!
//! At each decision point the arrived, unterminated process with the
//! smallest burst time is dispatched and runs to completion. Ties keep
//! the lowest input index. Cycles with no eligible process emit idle.

use tracing::debug;

use super::{check_processes, finish, RunOptions};
use crate::error::Result;
use crate::event::Trace;
use crate::models::{CycleEvent, Process, SimulationResult};

/// Runs the SJF policy.
pub fn run_sjf(
    processes: &mut [Process],
    options: RunOptions<'_>,
) -> Result<SimulationResult> {
    check_processes(processes)?;

    let mut trace = Trace::new(options.sink, options.cancel);
    let mut cycle: u32 = 0;
    let mut completed = 0;

    'run: while completed < processes.len() {
        if trace.cancelled() {
            break 'run;
        }

        // Strict < keeps the first index on ties
        let mut pick: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            if p.terminated || !p.has_arrived(cycle) {
                continue;
            }
            let better = match pick {
                None => true,
                Some(j) => p.burst_time < processes[j].burst_time,
            };
            if better {
                pick = Some(i);
            }
        }

        match pick {
            Some(i) => {
                let p = &mut processes[i];
                p.waiting_time = cycle - p.arrival_time;
                p.start_time = Some(cycle);
                debug!(pid = %p.pid, cycle, burst = p.burst_time, "sjf dispatch");

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
                completed += 1;
            }
            None => {
                trace.emit(CycleEvent::Idle, cycle);
                cycle += 1;
            }
        }
    }

    Ok(finish(trace, processes, "sjf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_picks_shortest_among_arrived() {
        // At cycle 0 only A has arrived; after A, both B and C are
        // eligible and the shorter C goes first.
        let mut procs = vec![
            Process::new("A", 4),
            Process::new("B", 3).with_arrival(1),
            Process::new("C", 1).with_arrival(2),
        ];
        let result = run_sjf(&mut procs, RunOptions::new()).unwrap();

        assert_eq!(
            result.labels(),
            vec!["A", "A", "A", "A", "C", "B", "B", "B"]
        );
        assert_eq!(procs[1].waiting_time, 4); // B: dispatched at 5, arrived at 1
        assert_eq!(procs[2].waiting_time, 2); // C: dispatched at 4, arrived at 2
    }

    #[test]
    fn test_sjf_tie_keeps_input_order() {
        let mut procs = vec![
            Process::new("X", 2),
            Process::new("Y", 2),
        ];
        let result = run_sjf(&mut procs, RunOptions::new()).unwrap();
        assert_eq!(result.labels(), vec!["X", "X", "Y", "Y"]);
    }

    #[test]
    fn test_sjf_idle_until_first_arrival() {
        let mut procs = vec![Process::new("A", 1).with_arrival(2)];
        let result = run_sjf(&mut procs, RunOptions::new()).unwrap();
        assert_eq!(result.labels(), vec!["IDLE", "IDLE", "A"]);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // B is shorter but arrives while A runs; A is not preempted.
        let mut procs = vec![
            Process::new("A", 5),
            Process::new("B", 1).with_arrival(1),
        ];
        let result = run_sjf(&mut procs, RunOptions::new()).unwrap();
        assert_eq!(result.labels(), vec!["A", "A", "A", "A", "A", "B"]);
    }
}
