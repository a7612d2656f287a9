//! Step state machine: snapshot, reducer, gated stages and sessions.

/// Sessions tying stage, snapshot, results and telemetry together.
pub mod session;
pub mod snapshot;
/// Stage ordering and completion gates.
pub mod stage;
pub mod update;

pub use session::{Session, Transition};
pub use snapshot::{DAYS_PER_WEEK, InputSnapshot};
pub use stage::{Stage, advance, can_advance, restart};
pub use update::{SnapshotUpdate, apply_update};
