//! Resource model.
//!
//! A resource is a named entity processes contend for: a file, a device,
//! a critical section. The input record carries only identity and
//! capacity — protocol state (lock holder, permit pool, hold countdowns)
//! is owned by the synchronization engine for the duration of one run.

use serde::{Deserialize, Serialize};

/// A synchronizable resource.
///
/// Under the mutex protocol the capacity is ignored (a mutex admits one
/// holder at a time); under the semaphore protocol it seeds the permit
/// pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name.
    pub name: String,
    /// Initial permit count (semaphore protocol).
    pub capacity: u32,
}

impl Resource {
    /// Creates a new resource.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}
