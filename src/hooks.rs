//! Custom Dioxus hooks for roster-dioxus components.

use dioxus::prelude::*;

use crate::state::RosterSnapshot;

/// Read the current roster snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> RosterSnapshot {
    use_context::<Signal<RosterSnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after processing commands).
///
/// Use this in components that need to update the snapshot after sending commands.
#[must_use]
pub fn use_snapshot_signal() -> Signal<RosterSnapshot> {
    use_context::<Signal<RosterSnapshot>>()
}
