//! Simulation domain models.
//!
//! Passive data entities shared by both engines: processes for the
//! scheduling engine, resources and actions for the synchronization
//! engine, and the timeline/result types both produce.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | CPU work unit with burst, arrival, priority |
//! | `Resource` | Named entity with a permit capacity |
//! | `Action` | A resource request issued at a cycle |
//! | `CycleEvent` | Structured per-cycle event (Idle/Busy/Access/Wait) |
//! | `SimulationResult` | Timeline plus summary averages |

mod action;
mod process;
mod resource;
mod timeline;

pub use action::{Action, Operation};
pub use process::Process;
pub use resource::Resource;
pub use timeline::{CycleEvent, SimulationResult, TimelineEntry};
