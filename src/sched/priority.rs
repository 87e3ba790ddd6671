//! Priority scheduling (non-preemptive).
//!
//! Same control structure as SJF, selecting the smallest priority value
//! (lower = more urgent) instead of the smallest burst. Two dispatch
//! modes exist as an explicit configuration choice:
//!
//! - [`PriorityMode::ArrivalGated`]: only arrived processes are
//!   candidates; `waiting_time = dispatch cycle - arrival_time`.
//! - [`PriorityMode::Ungated`]: arrival time is ignored both for
//!   candidacy and accounting; `waiting_time` is the dispatch cycle
//!   itself, and the timeline never goes idle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_processes, finish, RunOptions};
use crate::error::Result;
use crate::event::Trace;
use crate::models::{CycleEvent, Process, SimulationResult};

/// How priority dispatch treats arrival times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityMode {
    /// Candidates must have arrived; waiting time counts from arrival.
    ArrivalGated,
    /// Candidates regardless of arrival; waiting time is the dispatch
    /// cycle itself.
    Ungated,
}

/// Runs the priority policy in the given mode.
pub fn run_priority(
    processes: &mut [Process],
    mode: PriorityMode,
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
            if p.terminated {
                continue;
            }
            if mode == PriorityMode::ArrivalGated && !p.has_arrived(cycle) {
                continue;
            }
            let better = match pick {
                None => true,
                Some(j) => p.priority < processes[j].priority,
            };
            if better {
                pick = Some(i);
            }
        }

        match pick {
            Some(i) => {
                let p = &mut processes[i];
                p.waiting_time = match mode {
                    PriorityMode::ArrivalGated => cycle - p.arrival_time,
                    PriorityMode::Ungated => cycle,
                };
                p.start_time = Some(cycle);
                debug!(pid = %p.pid, cycle, priority = p.priority, ?mode, "priority dispatch");

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

    Ok(finish(trace, processes, "priority"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_lowest_value_first() {
        let mut procs = vec![
            Process::new("low", 2).with_priority(5),
            Process::new("high", 2).with_priority(1),
        ];
        let result = run_priority(&mut procs, PriorityMode::ArrivalGated, RunOptions::new())
            .unwrap();
        assert_eq!(result.labels(), vec!["high", "high", "low", "low"]);
    }

    #[test]
    fn test_priority_tie_keeps_input_order() {
        let mut procs = vec![
            Process::new("X", 1).with_priority(3),
            Process::new("Y", 1).with_priority(3),
        ];
        let result = run_priority(&mut procs, PriorityMode::ArrivalGated, RunOptions::new())
            .unwrap();
        assert_eq!(result.labels(), vec!["X", "Y"]);
    }

    #[test]
    fn test_priority_gated_waits_for_arrival() {
        // The urgent process hasn't arrived at cycle 0, so the other
        // one runs first (non-preemptive once dispatched).
        let mut procs = vec![
            Process::new("late", 2).with_arrival(1).with_priority(0),
            Process::new("early", 3).with_priority(9),
        ];
        let result = run_priority(&mut procs, PriorityMode::ArrivalGated, RunOptions::new())
            .unwrap();
        assert_eq!(result.labels(), vec!["early", "early", "early", "late", "late"]);
        let late = &procs[0];
        assert_eq!(late.waiting_time, 2); // Dispatched at 3, arrived at 1
        assert_eq!(late.turnaround_time, 4);
    }

    #[test]
    fn test_priority_ungated_ignores_arrival() {
        // Ungated mode dispatches the urgent process immediately even
        // though its arrival cycle is in the future, and counts waiting
        // from cycle 0.
        let mut procs = vec![
            Process::new("late", 2).with_arrival(10).with_priority(0),
            Process::new("early", 3).with_priority(9),
        ];
        let result = run_priority(&mut procs, PriorityMode::Ungated, RunOptions::new())
            .unwrap();
        assert_eq!(result.labels(), vec!["late", "late", "early", "early", "early"]);
        assert_eq!(procs[0].waiting_time, 0); // Dispatch cycle 0
        assert_eq!(procs[1].waiting_time, 2); // Dispatch cycle 2
        assert_eq!(procs[1].turnaround_time, 5);
    }

    #[test]
    fn test_priority_gated_idles_until_arrival() {
        let mut procs = vec![Process::new("A", 1).with_arrival(2).with_priority(1)];
        let result = run_priority(&mut procs, PriorityMode::ArrivalGated, RunOptions::new())
            .unwrap();
        assert_eq!(result.labels(), vec!["IDLE", "IDLE", "A"]);
    }
}
