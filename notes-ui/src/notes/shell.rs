use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::NoteId;

use crate::api::HttpNotesApi;
use crate::interop::{scroll_to_top, BrowserConfirm};
use crate::notes::actions;
use crate::notes::components::note_form::NoteFormPanel;
use crate::notes::components::note_list::NoteList;
use crate::notes::components::toast_stack::ToastStack;
use crate::notes::state::NotesState;
use crate::notes::styles::NOTES_STYLES;

#[component]
pub fn NotesShell() -> Element {
    // Single owner of the cache, form and notifications for the whole subtree
    let mut notes = use_context_provider(|| Signal::new(NotesState::default()));
    let api = use_hook(|| Rc::new(HttpNotesApi::from_config()));

    {
        let api = api.clone();
        use_effect(move || {
            let api = api.clone();
            let mut store = notes;
            spawn(async move {
                actions::load_notes(api.as_ref(), &mut store).await;
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        use_callback(move |_: ()| {
            let api = api.clone();
            let mut store = notes;
            spawn(async move {
                actions::submit_note(api.as_ref(), &mut store).await;
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        use_callback(move |id: NoteId| {
            let api = api.clone();
            let mut store = notes;
            spawn(async move {
                actions::delete_note(api.as_ref(), &mut store, &BrowserConfirm, id).await;
            });
        })
    };

    let on_edit = use_callback(move |id: NoteId| {
        if notes.write().begin_edit(&id) {
            scroll_to_top();
        }
    });

    let on_cancel = use_callback(move |_: ()| {
        notes.write().cancel_edit();
    });

    rsx! {
        style { {NOTES_STYLES} }
        div {
            class: "notes-app",
            header {
                class: "notes-header",
                h1 { "📝 Notes" }
            }
            NoteFormPanel { on_submit, on_cancel }
            NoteList { on_edit, on_delete }
            ToastStack {}
        }
    }
}
