//! Projection of the note cache into what the page shows. Pure; never
//! mutates state.

use shared_types::{cmp_by_recency, NoteId};

use crate::format::{format_date, DateLocale};
use crate::notes::state::NoteListState;

pub const EMPTY_PLACEHOLDER: &str = "No notes yet. Create your first one!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_label: String,
    pub updated_label: String,
}

impl NoteCard {
    pub fn meta_line(&self) -> String {
        format!(
            "Created: {} | Updated: {}",
            self.created_label, self.updated_label
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    Empty { placeholder: &'static str },
    Cards(Vec<NoteCard>),
}

impl NotesView {
    pub fn cards(&self) -> &[NoteCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }
}

/// Cards ordered by `updated_at`, newest first.
pub fn render_notes(list: &NoteListState, locale: DateLocale) -> NotesView {
    if list.is_empty() {
        return NotesView::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        };
    }

    let mut notes: Vec<_> = list.notes().iter().collect();
    notes.sort_by(|a, b| cmp_by_recency(a, b));

    NotesView::Cards(
        notes
            .into_iter()
            .map(|note| NoteCard {
                id: note.id.clone(),
                title: note.title.clone(),
                content: note.content.clone(),
                created_label: format_date(&note.created_at, locale),
                updated_label: format_date(&note.updated_at, locale),
            })
            .collect(),
    )
}
