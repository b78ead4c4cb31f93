//! Data types for roster state management.
//!
//! Shared structures used for communication between the main-thread
//! [`RosterContext`](crate::state::RosterContext) and the UI components.

use crate::roster::{DropTarget, StudentEntry};

/// A student row as rendered in the roster view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInfo {
    pub id: DropTarget,
    pub name: String,
    pub email: String,
}

impl From<&StudentEntry> for StudentInfo {
    fn from(entry: &StudentEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            email: entry.email.clone(),
        }
    }
}

/// State of the drop-confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropConfirmationSnapshot {
    /// Identifier passed to the drop backend on confirm.
    pub target: DropTarget,
    /// Display name of the student being dropped.
    pub student_name: String,
    /// Prompt text shown in the dialog body.
    pub message: String,
    /// Whether the "also ban from this course" checkbox is checked.
    pub ban: bool,
    /// A drop request is running; the dialog stays open until it resolves.
    pub in_flight: bool,
    /// Inline error from the last failed drop attempt.
    pub error: Option<String>,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Error,
    Warning,
    Info,
    Success,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSnapshot {
    pub id: u64,
    pub message: String,
    pub severity: NotificationSeverity,
}

/// A snapshot of the roster state for rendering.
/// This is Clone + Send + Sync so it can be used with Dioxus.
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    pub course: String,
    pub students: Vec<StudentInfo>,

    // Drop confirmation dialog state
    pub drop_dialog_visible: bool,
    pub drop_dialog: DropConfirmationSnapshot,

    // Notification state
    pub notifications: Vec<NotificationSnapshot>,

    pub should_quit: bool,
}

/// Commands that can be sent to the roster context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    /// Open the drop-confirmation dialog for the given student.
    ShowDropConfirmation(DropTarget),
    /// Toggle the "also ban" checkbox in the open dialog.
    DropDialogToggleBan,
    /// Confirm the drop; invokes the backend.
    DropDialogConfirm,
    /// Close the dialog without side effects (Exit button or backdrop click).
    DropDialogCancel,
    /// Result of an in-flight drop request, sent back from the spawned task.
    DropCompleted {
        target: DropTarget,
        error: Option<String>,
    },

    ShowNotification {
        message: String,
        severity: NotificationSeverity,
    },
    DismissNotification(u64),
    DismissAllNotifications,

    Quit,
}
