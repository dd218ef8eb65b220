use dioxus_logger::tracing::{error, info, warn};
use shared_types::NoteId;

use crate::api::NotesApi;
use crate::notes::state::{EditingState, NotesStore};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this note?";

pub const MSG_CREATED: &str = "Note created";
pub const MSG_UPDATED: &str = "Note updated";
pub const MSG_DELETED: &str = "Note deleted";
pub const MSG_LOAD_FAILED: &str = "Could not load notes";
pub const MSG_SAVE_FAILED: &str = "Could not save note";
pub const MSG_DELETE_FAILED: &str = "Could not delete note";

/// Explicit user confirmation before a destructive action
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Replace the cache with the server's collection.
/// On failure the cache is left as it was.
pub async fn load_notes<A, S>(api: &A, store: &mut S) -> bool
where
    A: NotesApi + ?Sized,
    S: NotesStore,
{
    match api.list().await {
        Ok(notes) => {
            info!("Loaded {} notes", notes.len());
            store.modify(|state| state.apply_loaded(notes));
            true
        }
        Err(e) => {
            error!("Failed to load notes: {}", e);
            store.modify(|state| {
                state.loading = false;
                state.notifier.error(MSG_LOAD_FAILED);
            });
            false
        }
    }
}

/// Submit the form in its current mode, then reset and reload on success.
pub async fn submit_note<A, S>(api: &A, store: &mut S) -> bool
where
    A: NotesApi + ?Sized,
    S: NotesStore,
{
    let request = match store.modify(|state| state.form.begin_submit()) {
        Ok(Some(request)) => request,
        Ok(None) => {
            warn!("Submit ignored, previous save still in flight");
            return false;
        }
        Err(e) => {
            warn!("Rejected note form: {}", e);
            store.modify(|state| state.notifier.error(e.to_string()));
            return false;
        }
    };

    let (result, success_message) = match &request.target {
        EditingState::Creating => (api.create(&request.draft).await, MSG_CREATED),
        EditingState::Editing(id) => (api.update(id, &request.draft).await, MSG_UPDATED),
    };

    match result {
        Ok(()) => {
            store.modify(|state| {
                state.notifier.success(success_message);
                state.form.finish_submit(&request.target);
            });
            load_notes(api, store).await;
            true
        }
        Err(e) => {
            error!("Failed to save note: {}", e);
            store.modify(|state| {
                state.form.fail_submit();
                state.notifier.error(MSG_SAVE_FAILED);
            });
            false
        }
    }
}

/// Delete a note after confirmation. Form state is untouched.
pub async fn delete_note<A, S, C>(api: &A, store: &mut S, confirm: &C, id: NoteId) -> bool
where
    A: NotesApi + ?Sized,
    S: NotesStore,
    C: ConfirmPrompt + ?Sized,
{
    if !confirm.confirm(DELETE_CONFIRMATION) {
        return false;
    }

    match api.delete(&id).await {
        Ok(()) => {
            store.modify(|state| {
                state.notifier.success(MSG_DELETED);
            });
            load_notes(api, store).await;
            true
        }
        Err(e) => {
            error!("Failed to delete note {}: {}", id, e);
            store.modify(|state| {
                state.notifier.error(MSG_DELETE_FAILED);
            });
            false
        }
    }
}
