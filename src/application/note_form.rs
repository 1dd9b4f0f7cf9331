// src/application/note_form.rs
use crate::domain::{Category, DomainError, Note, NoteCategory, NoteDraft};

/// Editable note fields backing the create and update commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
    pub category: NoteCategory,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with an existing note's fields
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            description: note.description.clone(),
            category: note.category.clone(),
        }
    }

    /// Overwrite only the fields that were supplied
    pub fn apply(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        category: Option<Category>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category.into();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_valid(&self) -> bool {
        self.draft().validate().is_ok()
    }

    pub fn to_draft(&self) -> Result<NoteDraft, DomainError> {
        let draft = self.draft();
        draft.validate()?;
        Ok(draft)
    }

    fn draft(&self) -> NoteDraft {
        NoteDraft::new(
            self.title.clone(),
            self.description.clone(),
            self.category.clone(),
        )
    }
}
