// src/application/note_viewer.rs
use crate::domain::{DomainError, Note, NoteDraft, NoteId};

/// Access to the remote note collection
pub trait NoteRepository {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError>;

    /// Returns the created note when the server echoes it back
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Option<Note>, DomainError>;

    /// Returns the updated note when the server echoes it back
    fn update_note(&mut self, id: &NoteId, draft: &NoteDraft)
        -> Result<Option<Note>, DomainError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        (**self).list_notes()
    }

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        (**self).get_note(id)
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Option<Note>, DomainError> {
        (**self).create_note(draft)
    }

    fn update_note(
        &mut self,
        id: &NoteId,
        draft: &NoteDraft,
    ) -> Result<Option<Note>, DomainError> {
        (**self).update_note(id, draft)
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        (**self).delete_note(id)
    }
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: &NoteId) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
