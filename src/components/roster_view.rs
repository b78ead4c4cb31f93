//! Roster view component.
//!
//! Renders the section's student list. Each row carries the "Drop" trigger
//! that opens the drop-confirmation dialog.

use dioxus::prelude::*;

use crate::hooks::use_snapshot_signal;
use crate::state::{RosterCommand, StudentInfo};
use crate::AppState;

/// The section roster table.
#[component]
pub fn RosterView(course: String, students: Vec<StudentInfo>) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();
    let count = students.len();

    rsx! {
        div {
            class: "roster-view",

            div {
                class: "roster-header",
                "{course} — {count} students"
            }

            if students.is_empty() {
                div {
                    class: "roster-empty",
                    "No students enrolled."
                }
            }

            for student in students.iter() {
                div {
                    key: "{student.id}",
                    class: "roster-row",

                    div {
                        class: "roster-name",
                        "{student.name}"
                    }
                    div {
                        class: "roster-email",
                        "{student.email}"
                    }
                    button {
                        class: "drop-button",
                        onclick: {
                            let app_state = app_state.clone();
                            let target = student.id.clone();
                            move |_| {
                                app_state.send_command(RosterCommand::ShowDropConfirmation(
                                    target.clone(),
                                ));
                                app_state.process_and_notify(&mut snapshot_signal);
                            }
                        },
                        "Drop"
                    }
                }
            }
        }
    }
}
