use dioxus::prelude::*;

use crate::config::client_config;
use crate::notes::notifier::{schedule_dismissal, Toast, ToastPhase};
use crate::notes::state::NotesState;

#[component]
pub fn ToastStack() -> Element {
    let notes = use_context::<Signal<NotesState>>();
    let toasts = notes.read().notifier.toasts().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let notes = use_context::<Signal<NotesState>>();
    let id = toast.id;

    // One dismissal timer per notification, started on mount
    use_hook(move || {
        let config = client_config();
        spawn(schedule_dismissal(
            notes,
            id,
            config.toast_display_ms,
            config.toast_exit_ms,
        ))
    });

    let class = match toast.phase {
        ToastPhase::Visible => toast.kind.class().to_string(),
        ToastPhase::Leaving => format!("{} leaving", toast.kind.class()),
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "{toast.message}"
        }
    }
}
