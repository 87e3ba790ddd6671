//! Synchronization engine.
//!
//! Two cycle-stepping protocols — mutex and counting semaphore — over a
//! resource set and an ordered action list. Both share the same loop
//! shape: for each cycle up to the last requested cycle plus a drain
//! margin, fire the cycle's actions in input order, then run the
//! release pass, then emit a single idle entry if nothing fired.
//!
//! Protocol state lives in a run-local registry built from the input
//! records; the input is never aliased or mutated during simulation.
//! A `WAITING` action is not remembered or retried on later cycles —
//! contention is visible only at the instant of the request.
//!
//! # Reference
//! Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.3

mod mutex;
mod semaphore;

pub use mutex::run_mutex;
pub use semaphore::run_semaphore;

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::models::{Action, Resource};

/// Extra cycles simulated past the last requested cycle, enough to
/// drain pending holds.
pub(crate) const DRAIN_MARGIN: u32 = 5;

/// Rejects empty input and actions naming unknown resources.
///
/// An unknown resource fails the whole run at load time rather than
/// skipping the single action, so a typo never silently changes
/// contention.
pub(crate) fn check_sync_input(resources: &[Resource], actions: &[Action]) -> Result<()> {
    if resources.is_empty() {
        return Err(Error::EmptyInput("resources"));
    }
    if actions.is_empty() {
        return Err(Error::EmptyInput("actions"));
    }
    let known: BTreeSet<&str> = resources.iter().map(|r| r.name.as_str()).collect();
    for a in actions {
        if !known.contains(a.resource_name.as_str()) {
            return Err(Error::UnknownResource {
                pid: a.pid.clone(),
                resource: a.resource_name.clone(),
            });
        }
    }
    Ok(())
}

/// Last cycle to simulate: the latest requested cycle plus the margin.
pub(crate) fn horizon(actions: &[Action]) -> u32 {
    let last = actions.iter().map(|a| a.cycle).max().unwrap_or(0);
    last + DRAIN_MARGIN
}
