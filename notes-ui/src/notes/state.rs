use dioxus::prelude::{Signal, WritableExt};
use shared_types::{Note, NoteDraft, NoteId};

use crate::error::NotesError;
use crate::notes::notifier::Notifier;

pub const VALIDATION_MESSAGE: &str = "Please fill in every field";

/// Local copy of the server's note collection.
///
/// Only [`NoteListState::replace_all`] mutates it; the server stays the
/// source of truth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteListState {
    notes: Vec<Note>,
}

impl NoteListState {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// What a form submit will do
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingState {
    #[default]
    Creating,
    /// Lookup key into the cache; the note itself is not owned here
    Editing(NoteId),
}

impl EditingState {
    pub fn editing_id(&self) -> Option<&NoteId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// A validated submit, detached from the form so no borrow is held while
/// the request is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub target: EditingState,
    pub draft: NoteDraft,
}

/// Create/edit form: two modes plus the raw field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    pub mode: EditingState,
    pub title: String,
    pub content: String,
    pub submitting: bool,
}

impl NoteForm {
    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditingState::Creating => "New note",
            EditingState::Editing(_) => "Edit note",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditingState::Creating => "Save note",
            EditingState::Editing(_) => "Update note",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        matches!(self.mode, EditingState::Editing(_))
    }

    /// Creating → Editing(id), preloading the fields from `note`.
    pub fn begin_edit(&mut self, note: &Note) {
        self.mode = EditingState::Editing(note.id.clone());
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    /// Back to Creating with empty fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<NoteDraft, NotesError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(NotesError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        Ok(NoteDraft::new(title, content))
    }

    /// Validate and mark the form as submitting.
    ///
    /// `Ok(None)` means a submit is already in flight and this one is dropped.
    pub fn begin_submit(&mut self) -> Result<Option<SubmitRequest>, NotesError> {
        if self.submitting {
            return Ok(None);
        }
        let draft = self.validate()?;
        self.submitting = true;
        Ok(Some(SubmitRequest {
            target: self.mode.clone(),
            draft,
        }))
    }

    /// Keep mode and values after a failed save so the user can retry.
    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }

    /// Settle a successful save of `target`.
    ///
    /// The form resets only if it still points at what was saved; after a
    /// cancel mid-flight the user's new input is kept.
    pub fn finish_submit(&mut self, target: &EditingState) {
        if &self.mode == target {
            self.reset();
        } else {
            self.submitting = false;
        }
    }
}

/// Everything the notes page owns.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesState {
    pub list: NoteListState,
    pub form: NoteForm,
    pub notifier: Notifier,
    /// True until the first load settles
    pub loading: bool,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            list: NoteListState::default(),
            form: NoteForm::default(),
            notifier: Notifier::default(),
            loading: true,
        }
    }
}

impl NotesState {
    /// Replace the cache after a successful load.
    ///
    /// An edit whose target disappeared from the server is dropped back to
    /// Creating; any other form state is left alone.
    pub fn apply_loaded(&mut self, notes: Vec<Note>) {
        self.list.replace_all(notes);
        self.loading = false;

        let target_gone = self
            .form
            .mode
            .editing_id()
            .is_some_and(|id| self.list.find(id).is_none());
        if target_gone && !self.form.submitting {
            self.form.reset();
        }
    }

    /// Edit action from a card. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: &NoteId) -> bool {
        let Some(note) = self.list.find(id).cloned() else {
            return false;
        };
        self.form.begin_edit(&note);
        true
    }

    /// Back to Creating. An in-flight submit stays guarded until it settles.
    pub fn cancel_edit(&mut self) {
        let submitting = self.form.submitting;
        self.form.reset();
        self.form.submitting = submitting;
    }
}

/// Short, synchronous access to [`NotesState`].
///
/// Async actions go through this between awaits so a render never runs into
/// a borrow held across a network call.
pub trait NotesStore {
    fn modify<R>(&mut self, f: impl FnOnce(&mut NotesState) -> R) -> R;
}

impl NotesStore for NotesState {
    fn modify<R>(&mut self, f: impl FnOnce(&mut NotesState) -> R) -> R {
        f(self)
    }
}

impl NotesStore for Signal<NotesState> {
    fn modify<R>(&mut self, f: impl FnOnce(&mut NotesState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: title.to_string(),
            content: content.to_string(),
            created_at: "2024-03-01 10:00:00".to_string(),
            updated_at: "2024-03-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn form_starts_in_create_mode() {
        let form = NoteForm::default();
        assert_eq!(form.mode, EditingState::Creating);
        assert_eq!(form.heading(), "New note");
        assert_eq!(form.submit_label(), "Save note");
        assert!(!form.shows_cancel());
    }

    #[test]
    fn begin_edit_preloads_fields_and_switches_labels() {
        let mut state = NotesState::default();
        state.apply_loaded(vec![note(1, "Groceries", "Milk, eggs")]);

        assert!(state.begin_edit(&NoteId::from(1)));
        assert_eq!(state.form.mode, EditingState::Editing(NoteId::from(1)));
        assert_eq!(state.form.title, "Groceries");
        assert_eq!(state.form.content, "Milk, eggs");
        assert_eq!(state.form.heading(), "Edit note");
        assert_eq!(state.form.submit_label(), "Update note");
        assert!(state.form.shows_cancel());
    }

    #[test]
    fn begin_edit_on_unknown_id_is_a_no_op() {
        let mut state = NotesState::default();
        state.apply_loaded(vec![note(1, "a", "b")]);

        assert!(!state.begin_edit(&NoteId::from(99)));
        assert_eq!(state.form, NoteForm::default());
    }

    #[test]
    fn cancel_returns_to_creating_with_empty_fields() {
        let mut state = NotesState::default();
        state.apply_loaded(vec![note(1, "a", "b")]);
        state.begin_edit(&NoteId::from(1));

        state.cancel_edit();
        assert_eq!(state.form, NoteForm::default());
    }

    #[test]
    fn validation_trims_and_rejects_blank_fields() {
        let mut form = NoteForm {
            title: "  Title ".to_string(),
            content: "\n".to_string(),
            ..NoteForm::default()
        };
        assert!(form.validate().unwrap_err().is_validation());

        form.content = " body ".to_string();
        assert_eq!(form.validate().unwrap(), NoteDraft::new("Title", "body"));

        form.title = " \t".to_string();
        assert!(form.validate().unwrap_err().is_validation());
    }

    #[test]
    fn second_submit_while_in_flight_is_dropped() {
        let mut form = NoteForm {
            title: "t".to_string(),
            content: "c".to_string(),
            ..NoteForm::default()
        };

        let first = form.begin_submit().unwrap();
        assert!(first.is_some());
        assert!(form.submitting);
        assert_eq!(form.begin_submit().unwrap(), None);

        form.fail_submit();
        assert!(!form.submitting);
        assert_eq!(form.title, "t");
    }

    #[test]
    fn cancel_during_save_keeps_submit_guard() {
        let mut state = NotesState::default();
        state.apply_loaded(vec![note(1, "a", "b")]);
        state.begin_edit(&NoteId::from(1));
        let first = state.form.begin_submit().unwrap().unwrap();

        state.cancel_edit();
        assert_eq!(state.form.mode, EditingState::Creating);
        assert!(state.form.title.is_empty());
        assert!(state.form.submitting);

        state.form.title = "new".to_string();
        state.form.content = "note".to_string();
        assert_eq!(state.form.begin_submit().unwrap(), None);

        state.form.finish_submit(&first.target);
        assert!(!state.form.submitting);
        assert_eq!(state.form.title, "new");
        assert_eq!(state.form.content, "note");
        assert!(state.form.begin_submit().unwrap().is_some());
    }

    #[test]
    fn finish_submit_resets_form_still_on_saved_target() {
        let mut form = NoteForm {
            mode: EditingState::Editing(NoteId::from(3)),
            title: "t".to_string(),
            content: "c".to_string(),
            ..NoteForm::default()
        };
        let request = form.begin_submit().unwrap().unwrap();

        form.finish_submit(&request.target);
        assert_eq!(form, NoteForm::default());
    }

    #[test]
    fn reload_drops_edit_of_deleted_note_only() {
        let mut state = NotesState::default();
        state.apply_loaded(vec![note(1, "a", "b"), note(2, "c", "d")]);
        state.begin_edit(&NoteId::from(1));

        state.apply_loaded(vec![note(1, "a", "b")]);
        assert_eq!(state.form.mode, EditingState::Editing(NoteId::from(1)));

        state.apply_loaded(vec![note(2, "c", "d")]);
        assert_eq!(state.form.mode, EditingState::Creating);
        assert!(state.form.title.is_empty());
    }

    #[test]
    fn first_load_clears_loading_flag() {
        let mut state = NotesState::default();
        assert!(state.loading);
        state.apply_loaded(Vec::new());
        assert!(!state.loading);
        assert!(state.list.is_empty());
    }
}
