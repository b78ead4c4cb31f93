//! Test helpers for roster state tests.
//!
//! Provides a recording drop backend and utilities to create a
//! `RosterContext` wired to it.

use std::sync::mpsc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::backend::{DropBackend, DropError, DropFlags};
use crate::roster::{DropTarget, Roster};
use crate::state::RosterContext;

/// Global Tokio runtime shared across all tests.
///
/// `RosterContext::new` captures the ambient runtime handle and confirm
/// spawns the drop request on it, so a Tokio runtime must be active. We
/// store it in a `OnceLock` so it lives for the entire test process.
static TEST_RUNTIME: std::sync::OnceLock<tokio::runtime::Runtime> = std::sync::OnceLock::new();

/// Get the shared test runtime.
pub(crate) fn runtime() -> &'static tokio::runtime::Runtime {
    TEST_RUNTIME
        .get_or_init(|| tokio::runtime::Runtime::new().expect("tokio runtime should start"))
}

/// Drop backend that records every call instead of talking to a server.
///
/// `fail_with` makes subsequent calls fail with the given status, so tests
/// can exercise the error path.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: parking_lot::Mutex<Vec<(DropTarget, DropFlags)>>,
    pub fail_with: parking_lot::Mutex<Option<u16>>,
}

impl RecordingBackend {
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn set_failure(&self, status: Option<u16>) {
        *self.fail_with.lock() = status;
    }
}

#[async_trait]
impl DropBackend for RecordingBackend {
    async fn drop_student(&self, target: &DropTarget, flags: DropFlags) -> Result<(), DropError> {
        self.calls.lock().push((target.clone(), flags));
        match *self.fail_with.lock() {
            Some(status) => Err(DropError::Rejected {
                target: target.clone(),
                status,
            }),
            None => Ok(()),
        }
    }
}

/// A small fixed roster matching the demo course.
pub fn sample_roster() -> Roster {
    Roster::demo()
}

/// Create a `RosterContext` backed by a [`RecordingBackend`].
///
/// Returns the context and a handle to the backend for assertions.
pub fn test_context(roster: Roster) -> (RosterContext, Arc<RecordingBackend>) {
    let _guard = runtime().enter();

    let (tx, rx) = mpsc::channel();
    let backend = Arc::new(RecordingBackend::default());
    let ctx = RosterContext::new(roster, backend.clone(), rx, tx);

    (ctx, backend)
}

/// Wait for the in-flight drop request to finish, then process the
/// completion command it sent back.
///
/// Panics if no drop request is running.
pub fn wait_for_drop(ctx: &mut RosterContext) {
    let handle = ctx
        .pending_drop
        .take()
        .expect("a drop request should be in flight");
    runtime()
        .block_on(handle)
        .expect("drop task should not panic");
    ctx.process_commands();
}
