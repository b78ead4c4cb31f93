//! Drop-confirmation dialog component.
//!
//! A modal dialog for confirming that a student should be dropped from the
//! section. The confirm action invokes the drop backend; the dialog stays
//! open with a busy indicator until the request resolves, and shows an
//! inline error when it fails.

use dioxus::prelude::*;

use crate::components::{KbdKey, ModalOverlay};
use crate::hooks::use_snapshot_signal;
use crate::state::{DropConfirmationSnapshot, RosterCommand};
use crate::AppState;

/// Drop-confirmation dialog component.
#[component]
pub fn DropConfirmationDialog(dialog: DropConfirmationSnapshot) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    let confirm_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(RosterCommand::DropDialogConfirm);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let cancel_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(RosterCommand::DropDialogCancel);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let ban_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(RosterCommand::DropDialogToggleBan);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    rsx! {
        ModalOverlay {
            class: "drop-confirmation",
            on_backdrop_click: {
                let mut cancel = cancel_handler.clone();
                move |evt| cancel(evt)
            },

            // Title
            div {
                class: "drop-confirmation-title",
                "Drop student"
            }

            // Prompt
            div {
                class: "drop-confirmation-message",
                "{dialog.message}"
            }
            div {
                class: "drop-confirmation-student",
                "{dialog.student_name} ({dialog.target})"
            }

            // Ban checkbox
            label {
                class: "drop-confirmation-ban",
                input {
                    r#type: "checkbox",
                    checked: dialog.ban,
                    disabled: dialog.in_flight,
                    onchange: {
                        let mut toggle = ban_handler.clone();
                        move |evt| toggle(evt)
                    },
                }
                "Also ban {dialog.student_name} from this course"
            }

            // Inline error from the last failed attempt
            if let Some(ref error) = dialog.error {
                div {
                    class: "drop-confirmation-error",
                    "{error}"
                }
            }

            // Busy indicator while the request is running
            if dialog.in_flight {
                div {
                    class: "drop-confirmation-busy",
                    "Dropping…"
                }
            }

            // Buttons
            div {
                class: "drop-confirmation-buttons",

                button {
                    class: "confirmation-btn exit-button",
                    disabled: dialog.in_flight,
                    onmousedown: {
                        let mut cancel = cancel_handler.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            cancel(evt);
                        }
                    },
                    KbdKey { label: "Esc" }
                    "Exit"
                }

                button {
                    class: "confirmation-btn confirm-drop-button",
                    disabled: dialog.in_flight,
                    onmousedown: {
                        let mut confirm = confirm_handler.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            confirm(evt);
                        }
                    },
                    KbdKey { label: "Enter" }
                    "Confirm drop"
                }
            }
        }
    }
}
