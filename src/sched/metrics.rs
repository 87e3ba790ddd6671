//! Run quality metrics.
//!
//! Summary indicators computed from a finished run: the per-policy
//! averages every result carries, plus a richer report for comparing
//! policies side by side.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Makespan | Total cycles simulated |
//! | CPU Utilization | Busy cycles / total cycles |

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationResult};

/// Mean waiting and turnaround times over all processes.
///
/// Callers guard against an empty slice before running; an empty slice
/// here yields zeros rather than dividing by zero.
pub(crate) fn averages(processes: &[Process]) -> (f64, f64) {
    if processes.is_empty() {
        return (0.0, 0.0);
    }
    let n = processes.len() as f64;
    let total_wait: u64 = processes.iter().map(|p| u64::from(p.waiting_time)).sum();
    let total_tat: u64 = processes.iter().map(|p| u64::from(p.turnaround_time)).sum();
    (total_wait as f64 / n, total_tat as f64 / n)
}

/// Per-process metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: String,
    /// Cycles spent eligible but not running.
    pub waiting_time: u32,
    /// Cycles from arrival to completion.
    pub turnaround_time: u32,
    /// Cycle of first dispatch, if the process ever ran.
    pub start_time: Option<u32>,
}

/// Summary report for one finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
    /// Total cycles simulated (busy and idle).
    pub makespan: u32,
    /// Fraction of cycles the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// One row per input process, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl RunMetrics {
    /// Computes the report from a finished run and its processes.
    pub fn calculate(result: &SimulationResult, processes: &[Process]) -> Self {
        let (avg_waiting_time, avg_turnaround_time) = averages(processes);
        let makespan = result.timeline.len() as u32;
        let busy = result.timeline.iter().filter(|e| e.event.is_busy()).count();
        let cpu_utilization = if result.timeline.is_empty() {
            0.0
        } else {
            busy as f64 / result.timeline.len() as f64
        };
        let per_process = processes
            .iter()
            .map(|p| ProcessMetrics {
                pid: p.pid.clone(),
                waiting_time: p.waiting_time,
                turnaround_time: p.turnaround_time,
                start_time: p.start_time,
            })
            .collect();
        Self {
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            cpu_utilization,
            per_process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::{run_fifo, RunOptions};

    #[test]
    fn test_averages() {
        let mut a = Process::new("A", 3);
        a.waiting_time = 0;
        a.turnaround_time = 3;
        let mut b = Process::new("B", 2);
        b.waiting_time = 2;
        b.turnaround_time = 4;

        let (w, t) = averages(&[a, b]);
        assert!((w - 1.0).abs() < 1e-10);
        assert!((t - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_averages_empty_guard() {
        let (w, t) = averages(&[]);
        assert_eq!(w, 0.0);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_run_metrics_with_idle_gap() {
        // A runs 0..2, idle 2..4, B runs 4..5
        let mut procs = vec![
            Process::new("A", 2),
            Process::new("B", 1).with_arrival(4),
        ];
        let result = run_fifo(&mut procs, RunOptions::new()).unwrap();
        let metrics = RunMetrics::calculate(&result, &procs);

        assert_eq!(metrics.makespan, 5);
        assert!((metrics.cpu_utilization - 0.6).abs() < 1e-10);
        assert_eq!(metrics.per_process.len(), 2);
        assert_eq!(metrics.per_process[0].pid, "A");
        assert_eq!(metrics.per_process[0].start_time, Some(0));
        assert_eq!(metrics.per_process[1].start_time, Some(4));
    }
}
