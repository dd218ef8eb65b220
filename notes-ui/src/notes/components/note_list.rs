use dioxus::prelude::*;
use shared_types::NoteId;

use crate::config::client_config;
use crate::notes::render::{render_notes, NoteCard, NotesView};
use crate::notes::state::NotesState;

#[component]
pub fn NoteList(on_edit: Callback<NoteId>, on_delete: Callback<NoteId>) -> Element {
    let notes = use_context::<Signal<NotesState>>();
    let locale = client_config().date_locale;

    let (first_load, view) = {
        let state = notes.read();
        (
            state.loading && state.list.is_empty(),
            render_notes(&state.list, locale),
        )
    };

    if first_load {
        return rsx! {
            div {
                class: "notes-list",
                p { class: "notes-loading", "Loading notes..." }
            }
        };
    }

    let body = match view {
        NotesView::Empty { placeholder } => rsx! {
            p { class: "no-notes", "{placeholder}" }
        },
        NotesView::Cards(cards) => rsx! {
            for card in cards {
                NoteCardView {
                    key: "{card.id}",
                    card: card.clone(),
                    on_edit,
                    on_delete,
                }
            }
        },
    };

    rsx! {
        div {
            class: "notes-list",
            {body}
        }
    }
}

#[component]
pub fn NoteCardView(
    card: NoteCard,
    on_edit: Callback<NoteId>,
    on_delete: Callback<NoteId>,
) -> Element {
    let edit_id = card.id.clone();
    let delete_id = card.id.clone();
    let meta = card.meta_line();

    rsx! {
        div {
            class: "note-card",
            h3 { "{card.title}" }
            p { "{card.content}" }
            div { class: "note-meta", "{meta}" }
            div {
                class: "note-actions",
                button {
                    class: "btn-small btn-edit",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "✏️ Edit"
                }
                button {
                    class: "btn-small btn-delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "🗑️ Delete"
                }
            }
        }
    }
}
