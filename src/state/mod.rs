//! Roster state management for Dioxus integration.
//!
//! The roster and dialog state live on the main thread and are never shared
//! with the UI directly. Components send [`RosterCommand`]s over a channel;
//! commands are drained on the main thread, and a read-only
//! [`RosterSnapshot`] is produced for rendering.
//!
//! The drop operation is asynchronous: confirming spawns a Tokio task that
//! calls the [`DropBackend`] and reports back through the same command
//! channel as [`RosterCommand::DropCompleted`].

mod types;

pub use types::{
    DropConfirmationSnapshot, NotificationSeverity, NotificationSnapshot, RosterCommand,
    RosterSnapshot, StudentInfo,
};

use std::sync::mpsc;
use std::sync::Arc;

use crate::backend::{DropBackend, DropFlags};
use crate::roster::{DropTarget, Roster};

/// Prompt text shown in the drop-confirmation dialog.
pub const DROP_PROMPT: &str = "Do you really want to drop?";

/// The roster state wrapper that lives on the main thread.
pub struct RosterContext {
    roster: Roster,
    command_rx: mpsc::Receiver<RosterCommand>,
    /// Sender handed to spawned tasks so async results re-enter the system.
    command_tx: mpsc::Sender<RosterCommand>,
    backend: Arc<dyn DropBackend>,
    runtime: tokio::runtime::Handle,

    // Drop confirmation dialog state
    drop_dialog_visible: bool,
    drop_dialog: DropConfirmationSnapshot,
    /// Handle of the running drop request, if any.
    pub(crate) pending_drop: Option<tokio::task::JoinHandle<()>>,

    // Notification state
    notifications: Vec<NotificationSnapshot>,
    notification_id_counter: u64,

    should_quit: bool,
}

impl RosterContext {
    /// Create a new roster context.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime; the drop request task is
    /// spawned on the ambient runtime.
    pub fn new(
        roster: Roster,
        backend: Arc<dyn DropBackend>,
        command_rx: mpsc::Receiver<RosterCommand>,
        command_tx: mpsc::Sender<RosterCommand>,
    ) -> Self {
        Self {
            roster,
            command_rx,
            command_tx,
            backend,
            runtime: tokio::runtime::Handle::current(),
            drop_dialog_visible: false,
            drop_dialog: DropConfirmationSnapshot::default(),
            pending_drop: None,
            notifications: Vec::new(),
            notification_id_counter: 0,
            should_quit: false,
        }
    }

    /// Process pending commands.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    /// Handle a single command.
    pub(crate) fn handle_command(&mut self, cmd: RosterCommand) {
        match cmd {
            RosterCommand::ShowDropConfirmation(target) => {
                self.show_drop_confirmation(&target);
            }
            RosterCommand::DropDialogToggleBan => {
                if self.drop_dialog_visible && !self.drop_dialog.in_flight {
                    self.drop_dialog.ban = !self.drop_dialog.ban;
                }
            }
            RosterCommand::DropDialogConfirm => {
                self.begin_drop();
            }
            RosterCommand::DropDialogCancel => {
                // The dialog must stay open while a request is running.
                if self.drop_dialog_visible && !self.drop_dialog.in_flight {
                    self.close_drop_dialog();
                }
            }
            RosterCommand::DropCompleted { target, error } => {
                self.finish_drop(&target, error);
            }

            RosterCommand::ShowNotification { message, severity } => {
                self.show_notification(message, severity);
            }
            RosterCommand::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }
            RosterCommand::DismissAllNotifications => {
                self.notifications.clear();
            }

            RosterCommand::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Open the confirmation dialog for `target`.
    ///
    /// At most one dialog is visible at a time; a trigger activation while a
    /// dialog is already open is ignored.
    fn show_drop_confirmation(&mut self, target: &DropTarget) {
        if self.drop_dialog_visible {
            log::warn!("Drop confirmation already open, ignoring trigger for {target}");
            return;
        }
        let Some(student) = self.roster.find(target) else {
            // Stale row, e.g. the student was already dropped elsewhere.
            log::warn!("Drop trigger for unknown target {target}");
            self.show_notification(
                format!("{target} is no longer in the roster"),
                NotificationSeverity::Warning,
            );
            return;
        };

        self.drop_dialog = DropConfirmationSnapshot {
            target: target.clone(),
            student_name: student.name.clone(),
            message: DROP_PROMPT.to_string(),
            ban: false,
            in_flight: false,
            error: None,
        };
        self.drop_dialog_visible = true;
    }

    /// Start the drop request for the current dialog target.
    ///
    /// The backend is invoked exactly once per confirmation: a confirm while
    /// a request is already in flight is ignored.
    fn begin_drop(&mut self) {
        if !self.drop_dialog_visible || self.drop_dialog.in_flight {
            return;
        }

        let target = self.drop_dialog.target.clone();
        let flags = DropFlags {
            banned: self.drop_dialog.ban,
        };
        self.drop_dialog.in_flight = true;
        self.drop_dialog.error = None;

        log::info!("Dropping {target} (banned: {})", flags.banned);

        let backend = Arc::clone(&self.backend);
        let tx = self.command_tx.clone();
        let handle = self.runtime.spawn(async move {
            let error = backend
                .drop_student(&target, flags)
                .await
                .err()
                .map(|e| e.to_string());
            let _ = tx.send(RosterCommand::DropCompleted { target, error });
        });
        self.pending_drop = Some(handle);
    }

    /// Apply the result of a finished drop request.
    fn finish_drop(&mut self, target: &DropTarget, error: Option<String>) {
        self.pending_drop = None;

        match error {
            None => {
                let name = self
                    .roster
                    .remove(target)
                    .map_or_else(|| target.to_string(), |s| s.name);
                self.close_drop_dialog();
                self.show_notification(
                    format!("Dropped {name} from {}", self.roster.course),
                    NotificationSeverity::Success,
                );
            }
            Some(message) => {
                log::error!("Drop of {target} failed: {message}");
                self.drop_dialog.in_flight = false;
                self.drop_dialog.error = Some(message);
            }
        }
    }

    fn close_drop_dialog(&mut self) {
        self.drop_dialog_visible = false;
        self.drop_dialog = DropConfirmationSnapshot::default();
    }

    /// Show a toast notification.
    fn show_notification(&mut self, message: String, severity: NotificationSeverity) {
        self.notification_id_counter += 1;
        self.notifications.push(NotificationSnapshot {
            id: self.notification_id_counter,
            message,
            severity,
        });
    }

    /// Create a read-only snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            course: self.roster.course.clone(),
            students: self.roster.students.iter().map(StudentInfo::from).collect(),
            drop_dialog_visible: self.drop_dialog_visible,
            drop_dialog: self.drop_dialog.clone(),
            notifications: self.notifications.clone(),
            should_quit: self.should_quit,
        }
    }
}
