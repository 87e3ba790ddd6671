//! Pre-flight input validation.
//!
//! Structural integrity checks over loaded input before simulation:
//! duplicate identifiers, zero bursts, zero-capacity resources, actions
//! referencing unknown resources. All issues are collected in one pass
//! so a loader can report them together.
//!
//! Validation is advisory — the engines still enforce their own guards
//! (`EmptyInput`, `InvalidParameter`, `UnknownResource`) and fail fast
//! on the first violation.

use std::collections::HashSet;

use crate::models::{Action, Process, Resource};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// Two resources share the same name.
    DuplicateResource,
    /// A process has a zero burst time.
    ZeroBurst,
    /// A resource has zero capacity (every semaphore request will wait).
    ZeroCapacity,
    /// An action references a resource that doesn't exist.
    UnknownResource,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list for scheduling.
///
/// Checks:
/// 1. No duplicate pids
/// 2. Every burst time is positive
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", p.pid),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates resources and actions for synchronization.
///
/// Checks:
/// 1. No duplicate resource names
/// 2. No zero-capacity resources
/// 3. Every action references an existing resource
pub fn validate_sync_input(resources: &[Resource], actions: &[Action]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for r in resources {
        if !names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateResource,
                format!("Duplicate resource name: {}", r.name),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Resource '{}' has zero capacity", r.name),
            ));
        }
    }

    for a in actions {
        if !names.contains(a.resource_name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownResource,
                format!(
                    "Action for pid '{}' references unknown resource '{}'",
                    a.pid, a.resource_name
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
