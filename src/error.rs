//! Engine error taxonomy.
//!
//! Everything here is a rejected run: the engine reports the problem and
//! never starts simulating. Conditions arising mid-run (no eligible
//! process, resource contention) are normal control flow — idle or
//! waiting cycles — not errors. Nothing in the simulation panics.

use thiserror::Error;

/// Errors reported by the scheduling and synchronization engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No input was supplied; averages would be undefined.
    #[error("empty input: no {0} supplied")]
    EmptyInput(&'static str),

    /// A parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An action names a resource absent from the resource set.
    ///
    /// The whole run is rejected at load time rather than skipping the
    /// single action, so a typo never silently changes contention.
    #[error("action for pid '{pid}' references unknown resource '{resource}'")]
    UnknownResource {
        /// Requesting process.
        pid: String,
        /// The missing resource name.
        resource: String,
    },
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, Error>;
