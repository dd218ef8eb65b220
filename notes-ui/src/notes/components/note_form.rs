use dioxus::prelude::*;

use crate::notes::state::NotesState;

#[component]
pub fn NoteFormPanel(on_submit: Callback<()>, on_cancel: Callback<()>) -> Element {
    let mut notes = use_context::<Signal<NotesState>>();
    let form = notes.read().form.clone();
    let heading = form.heading();
    let submit_label = form.submit_label();

    rsx! {
        form {
            class: "note-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },

            h2 { "{heading}" }

            input {
                r#type: "text",
                placeholder: "Title",
                value: "{form.title}",
                oninput: move |e: FormEvent| {
                    notes.write().form.title = e.value();
                },
            }

            textarea {
                placeholder: "Write your note...",
                value: "{form.content}",
                oninput: move |e: FormEvent| {
                    notes.write().form.content = e.value();
                },
            }

            div {
                class: "form-buttons",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: form.submitting,
                    "{submit_label}"
                }
                if form.shows_cancel() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
