//! Discrete-cycle scheduling and resource-synchronization simulator.
//!
//! Given a set of processes (or resource-access actions), deterministically
//! computes, cycle by cycle, which entity holds the CPU (or a resource),
//! producing a timeline plus summary metrics. A "cycle" is a logical unit
//! of discrete time, not a hardware tick; the simulation is single-threaded
//! and fully reproducible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Resource`, `Action`,
//!   `CycleEvent`, `TimelineEntry`, `SimulationResult`
//! - **`sched`**: Five dispatch policies (FIFO, SJF, SRT, Round Robin,
//!   Priority) plus run metrics
//! - **`sync`**: Mutex and counting-semaphore protocol simulations
//! - **`event`**: Per-cycle event sink and cooperative cancellation
//! - **`validation`**: Pre-flight input integrity checks
//!
//! # Architecture
//!
//! The engines never call each other; they share only the data model and
//! the sink contract. Per-cycle notifications are delivered synchronously
//! in cycle order, so presentation (pacing, Gantt rendering, coloring)
//! can live entirely outside the core.
//!
//! # Example
//!
//! ```
//! use cyclesim::models::Process;
//! use cyclesim::sched::{run_round_robin, RunOptions};
//!
//! let mut processes = vec![
//!     Process::new("A", 4),
//!     Process::new("B", 2),
//! ];
//! let result = run_round_robin(&mut processes, 2, RunOptions::new()).unwrap();
//! assert_eq!(result.labels(), vec!["A", "A", "B", "B", "A", "A"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5-7
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2

pub mod error;
pub mod event;
pub mod models;
pub mod sched;
pub mod sync;
pub mod validation;

pub use error::{Error, Result};
