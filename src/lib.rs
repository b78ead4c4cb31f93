//! Roster Dioxus - a Dioxus GUI for coordinator section rosters.
//!
//! The centerpiece is the drop-confirmation dialog: each student row in the
//! roster carries a "Drop" trigger; activating it opens a modal overlay with
//! a confirmation prompt, a "Confirm drop" action wired to the external drop
//! backend, and an "Exit" action.
//!
//! ## Architecture
//!
//! The roster state lives on the main thread and is never shared with the
//! UI directly:
//!
//! 1. `RosterContext` lives on the main thread and is never shared
//! 2. We create snapshots of roster state for rendering
//! 3. Commands are sent via channels and processed on the main thread
//! 4. The async drop request is spawned on Tokio and reports back through
//!    the same command channel

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::Signal;
use dioxus::prelude::WritableExt;

// Public library modules
pub mod args;
pub mod backend;
pub mod components;
pub mod config;
pub mod hooks;
pub mod roster;
pub mod state;
pub mod tracing;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use args::StartupAction;
pub use config::RdxConfig;
pub use roster::{DropTarget, Roster};
pub use state::{RosterCommand, RosterContext, RosterSnapshot};

use backend::HttpDropBackend;

// Thread-local storage for RosterContext to allow synchronous command processing
thread_local! {
    pub(crate) static ROSTER_CTX: RefCell<Option<Rc<RefCell<RosterContext>>>> = const { RefCell::new(None) };
}

/// Stylesheet for the roster UI.
const STYLESHEET: &str = include_str!("../assets/style.css");

/// Launch the Dioxus desktop application.
///
/// Before calling this, ensure a Tokio runtime is active (via
/// `Runtime::enter()`); the drop request task is spawned on it.
pub fn launch(config: RdxConfig, startup_action: StartupAction) -> Result<()> {
    // Create command channel
    let (command_tx, command_rx) = mpsc::channel::<RosterCommand>();

    // Load the roster based on the startup action
    let roster = match &startup_action {
        StartupAction::None => Roster::demo(),
        StartupAction::OpenRoster(path) => {
            let roster = Roster::load_from(path)?;
            // Picked up on the first event loop iteration
            let _ = command_tx.send(RosterCommand::ShowNotification {
                message: format!(
                    "Loaded {} students from {}",
                    roster.students.len(),
                    path.display()
                ),
                severity: state::NotificationSeverity::Info,
            });
            roster
        }
    };

    let backend = Arc::new(HttpDropBackend::new(config.backend.base_url.clone()));
    let roster_ctx = RosterContext::new(roster, backend, command_rx, command_tx.clone());

    // Create initial snapshot
    let initial_snapshot = roster_ctx.snapshot();

    // Wrap roster context in Rc<RefCell> for single-threaded access
    let roster_ctx = Rc::new(RefCell::new(roster_ctx));

    // Store in thread-local for synchronous command processing from Dioxus components
    ROSTER_CTX.with(|ctx| {
        *ctx.borrow_mut() = Some(roster_ctx.clone());
    });

    // Create app state that can be shared with Dioxus
    let app_state = AppState {
        command_tx,
        snapshot: Arc::new(parking_lot::Mutex::new(initial_snapshot)),
    };

    // Clone for the closure
    let roster_ctx_clone = roster_ctx.clone();
    let snapshot_ref = app_state.snapshot.clone();

    // Stylesheet plus configured theme tokens
    let custom_head = format!("<style>{STYLESHEET}</style>{}", config.theme_css());

    // Launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head)
                .with_custom_event_handler(move |_event, _target| {
                    // Process commands on each event loop iteration
                    if let Ok(mut ctx) = roster_ctx_clone.try_borrow_mut() {
                        ctx.process_commands();
                        let new_snapshot = ctx.snapshot();

                        if new_snapshot.should_quit {
                            std::process::exit(0);
                        }

                        *snapshot_ref.lock() = new_snapshot;
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<RosterCommand>,
    pub snapshot: Arc<parking_lot::Mutex<RosterSnapshot>>,
}

impl AppState {
    /// Send a command to the roster context.
    pub fn send_command(&self, cmd: RosterCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Process pending commands, update the shared snapshot, and push the
    /// fresh snapshot into the signal so subscribed components re-render.
    ///
    /// Call this after sending commands from an event handler.
    pub fn process_and_notify(&self, signal: &mut Signal<RosterSnapshot>) {
        ROSTER_CTX.with(|ctx| {
            if let Some(ref roster_ctx) = *ctx.borrow() {
                if let Ok(mut roster) = roster_ctx.try_borrow_mut() {
                    roster.process_commands();
                    let new_snapshot = roster.snapshot();

                    if new_snapshot.should_quit {
                        std::process::exit(0);
                    }

                    *self.snapshot.lock() = new_snapshot.clone();
                    signal.set(new_snapshot);
                }
            }
        });
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn get_snapshot(&self) -> RosterSnapshot {
        self.snapshot.lock().clone()
    }
}
