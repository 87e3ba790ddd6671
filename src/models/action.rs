//! Action model.
//!
//! An action is an intended resource access: which process, which
//! resource, what kind of operation, and the cycle at which the request
//! is issued. Actions are immutable once loaded; several actions may
//! share the same cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of access an action performs.
///
/// Used only for labeling timeline events — it does not change access
/// semantics (a read contends exactly like a write).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Read access.
    Read,
    /// Write access.
    Write,
    /// Domain-specific operation kind.
    Custom(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => write!(f, "READ"),
            Operation::Write => write!(f, "WRITE"),
            Operation::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// An intended resource access at a specific cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Requesting process identifier.
    pub pid: String,
    /// Operation kind (labeling only).
    pub operation: Operation,
    /// Name of the resource being requested.
    pub resource_name: String,
    /// Cycle at which the request is issued.
    pub cycle: u32,
}

impl Action {
    /// Creates a new action.
    pub fn new(
        pid: impl Into<String>,
        operation: Operation,
        resource_name: impl Into<String>,
        cycle: u32,
    ) -> Self {
        Self {
            pid: pid.into(),
            operation,
            resource_name: resource_name.into(),
            cycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_new() {
        let a = Action::new("P1", Operation::Read, "R1", 4);
        assert_eq!(a.pid, "P1");
        assert_eq!(a.operation, Operation::Read);
        assert_eq!(a.resource_name, "R1");
        assert_eq!(a.cycle, 4);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Read.to_string(), "READ");
        assert_eq!(Operation::Write.to_string(), "WRITE");
        assert_eq!(Operation::Custom("LOCK".into()).to_string(), "LOCK");
    }
}
