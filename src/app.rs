//! Main application component.
//!
//! This is the root Dioxus component that composes the roster UI.

use dioxus::prelude::Modifiers;
use dioxus::prelude::*;

use crate::components::{DropConfirmationDialog, NotificationContainer, RosterView};
use crate::state::RosterCommand;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();

    // Provide the snapshot signal; components subscribe via use_snapshot.
    let mut snapshot_signal = use_context_provider(|| Signal::new(app_state.get_snapshot()));
    let snapshot = snapshot_signal.read().clone();

    // Auto-focus the app container on mount so key events arrive immediately
    use_effect(|| {
        document::eval(
            r#"
            requestAnimationFrame(() => {
                const container = document.querySelector('.app-container');
                if (container) {
                    container.focus();
                }
            });
        "#,
        );
    });

    let app_state_for_keys = app_state.clone();
    let dialog_visible = snapshot.drop_dialog_visible;

    // Keyboard shortcuts: Esc cancels / Enter confirms the dialog, Ctrl+Q quits.
    let onkeydown = move |evt: KeyboardEvent| {
        let ctrl = evt.modifiers().contains(Modifiers::CONTROL);
        let command = match evt.key() {
            Key::Escape if dialog_visible => Some(RosterCommand::DropDialogCancel),
            Key::Enter if dialog_visible => Some(RosterCommand::DropDialogConfirm),
            Key::Character(ch) if ctrl && ch == "q" => Some(RosterCommand::Quit),
            _ => None,
        };
        if let Some(command) = command {
            app_state_for_keys.send_command(command);
            app_state_for_keys.process_and_notify(&mut snapshot_signal);
            evt.prevent_default();
        }
    };

    rsx! {
        document::Title { "rdx — {snapshot.course}" }

        div {
            class: "app-container",
            tabindex: 0,
            onkeydown: onkeydown,

            RosterView {
                course: snapshot.course.clone(),
                students: snapshot.students.clone(),
            }

            if snapshot.drop_dialog_visible {
                DropConfirmationDialog { dialog: snapshot.drop_dialog.clone() }
            }

            NotificationContainer {}
        }
    }
}
