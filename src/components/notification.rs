//! Notification toast component.
//!
//! Displays toast notifications in the bottom-right corner of the window.

use dioxus::prelude::*;

use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::state::{NotificationSeverity, NotificationSnapshot, RosterCommand};
use crate::AppState;

/// Container for notification toasts.
///
/// Reads the notification list straight from the snapshot context so it
/// re-renders whenever a toast is shown or dismissed.
#[component]
pub fn NotificationContainer() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();
    let notifications = use_snapshot().notifications;

    if notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notification-container",

            for notification in notifications.iter().rev() {
                NotificationToast {
                    key: "{notification.id}",
                    notification: notification.clone(),
                    on_dismiss: {
                        let app_state = app_state.clone();
                        let id = notification.id;
                        move |()| {
                            app_state.send_command(RosterCommand::DismissNotification(id));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },
                }
            }
        }
    }
}

/// A single notification toast.
#[component]
fn NotificationToast(notification: NotificationSnapshot, on_dismiss: EventHandler<()>) -> Element {
    let (severity_class, glyph) = match notification.severity {
        NotificationSeverity::Error => ("notification-error", "✕"),
        NotificationSeverity::Warning => ("notification-warning", "!"),
        NotificationSeverity::Info => ("notification-info", "i"),
        NotificationSeverity::Success => ("notification-success", "✓"),
    };

    rsx! {
        div {
            class: "notification-toast {severity_class}",
            onclick: move |_| on_dismiss.call(()),

            span {
                class: "notification-icon",
                "{glyph}"
            }

            div {
                class: "notification-message",
                "{notification.message}"
            }

            button {
                class: "notification-close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_dismiss.call(());
                },
                "×"
            }
        }
    }
}
