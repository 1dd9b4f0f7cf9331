// src/application/note_store.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteFilter};
use tracing::{debug, error};

/// Most recently fetched note collection.
///
/// Contents are only ever replaced wholesale by [`NoteStore::refresh`]; a failed
/// refresh leaves the previous collection in place.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh<R: NoteRepository + ?Sized>(
        &mut self,
        repository: &mut R,
    ) -> Result<&[Note], DomainError> {
        match repository.list_notes() {
            Ok(notes) => {
                debug!(count = notes.len(), "Refreshed note store");
                self.notes = notes;
                Ok(&self.notes)
            }
            Err(e) => {
                error!(error = %e, "Error fetching notes");
                Err(e)
            }
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn visible(&self, filter: &NoteFilter) -> Vec<Note> {
        filter.apply(&self.notes)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::util::testing::{sample_note, MockFailure, MockNoteRepository, MockOperation};

    #[test]
    fn given_new_store_then_is_empty() {
        let store = NoteStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn given_server_notes_when_refreshing_then_replaces_contents() {
        // Arrange
        let mut repo = MockNoteRepository::builder()
            .with_note(sample_note("1", "First", Category::Work))
            .with_note(sample_note("2", "Second", Category::Personal))
            .build();
        let mut store = NoteStore::new();

        // Act
        let notes = store.refresh(&mut repo).unwrap();

        // Assert
        assert_eq!(notes.len(), 2);
        assert_eq!(store.notes(), repo.server_notes());
    }

    #[test]
    fn given_failing_list_when_refreshing_then_keeps_previous_contents() {
        // Arrange
        let mut repo = MockNoteRepository::builder()
            .with_note(sample_note("1", "First", Category::Work))
            .build();
        let mut store = NoteStore::new();
        store.refresh(&mut repo).unwrap();
        repo.fail_next(MockOperation::List, MockFailure::Transport);

        // Act
        let result = store.refresh(&mut repo);

        // Assert
        assert!(matches!(result, Err(DomainError::Transport(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "First");
    }

    #[test]
    fn given_filter_when_reading_visible_then_applies_filter_to_cached_notes() {
        let mut repo = MockNoteRepository::builder()
            .with_note(sample_note("1", "Budget review", Category::Work))
            .with_note(sample_note("2", "Birthday gift", Category::Personal))
            .with_note(sample_note("3", "budget trip", Category::Personal))
            .build();
        let mut store = NoteStore::new();
        store.refresh(&mut repo).unwrap();

        let visible = store.visible(&NoteFilter::new("budget", "Personal"));

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "3");
    }
}
