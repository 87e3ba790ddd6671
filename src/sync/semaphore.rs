//! Counting-semaphore protocol simulation.
//!
//! Each resource carries a permit pool initialized to its capacity. A
//! request takes a permit when one is available (`ACCESSED`) or reports
//! `WAITING` for that one cycle; permits return automatically when the
//! fixed hold duration elapses. Concurrent holders are allowed up to
//! capacity.
//!
//! Hold countdowns decrement every cycle including the acquisition
//! cycle, so a permit taken at cycle `c` returns at the end of cycle
//! `c + HOLD_CYCLES - 1`. A pid re-requesting a resource it already
//! holds refreshes its countdown without consuming a second permit,
//! keeping `available <= capacity` an invariant of the pool.

use std::collections::BTreeMap;

use tracing::debug;

use super::{check_sync_input, horizon};
use crate::error::Result;
use crate::event::{RunOptions, Trace};
use crate::models::{Action, CycleEvent, Resource, TimelineEntry};

/// Cycles a permit is held after acquisition.
const HOLD_CYCLES: u32 = 3;

struct PermitPool {
    available: u32,
    /// pid -> remaining hold cycles; one outstanding hold per pid.
    holds: BTreeMap<String, u32>,
}

/// Runs the semaphore protocol over the resource set and action list.
pub fn run_semaphore(
    resources: &[Resource],
    actions: &[Action],
    options: RunOptions<'_>,
) -> Result<Vec<TimelineEntry>> {
    check_sync_input(resources, actions)?;

    // Run-local registry: every pool starts full
    let mut pools: BTreeMap<&str, PermitPool> = resources
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                PermitPool {
                    available: r.capacity,
                    holds: BTreeMap::new(),
                },
            )
        })
        .collect();

    let mut trace = Trace::new(options.sink, options.cancel);

    for cycle in 0..=horizon(actions) {
        if trace.cancelled() {
            break;
        }
        let mut fired = false;

        for a in actions.iter().filter(|a| a.cycle == cycle) {
            let Some(pool) = pools.get_mut(a.resource_name.as_str()) else {
                continue; // Unreachable: validated above
            };
            let granted = if pool.holds.contains_key(&a.pid) {
                // Already holding: refresh, no extra permit consumed
                pool.holds.insert(a.pid.clone(), HOLD_CYCLES);
                true
            } else if pool.available > 0 {
                pool.available -= 1;
                pool.holds.insert(a.pid.clone(), HOLD_CYCLES);
                debug!(
                    pid = %a.pid,
                    resource = %a.resource_name,
                    cycle,
                    available = pool.available,
                    "permit taken"
                );
                true
            } else {
                false
            };

            let event = if granted {
                CycleEvent::Access {
                    pid: a.pid.clone(),
                    resource: a.resource_name.clone(),
                    operation: a.operation.clone(),
                }
            } else {
                CycleEvent::Wait {
                    pid: a.pid.clone(),
                    resource: a.resource_name.clone(),
                    operation: a.operation.clone(),
                }
            };
            trace.emit(event, cycle);
            fired = true;
        }

        // Countdown pass: expired holds return their permits
        for pool in pools.values_mut() {
            let mut released = Vec::new();
            for (pid, left) in pool.holds.iter_mut() {
                *left -= 1;
                if *left == 0 {
                    released.push(pid.clone());
                }
            }
            for pid in released {
                pool.holds.remove(&pid);
                pool.available += 1;
                debug!(pid = %pid, cycle, "permit returned");
            }
        }

        if !fired {
            trace.emit(CycleEvent::Idle, cycle);
        }
    }

    Ok(trace.into_timeline())
}
