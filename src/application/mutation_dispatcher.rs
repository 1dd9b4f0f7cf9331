// src/application/mutation_dispatcher.rs
use crate::application::{NoteForm, NoteRepository, NoteStore};
use crate::domain::{DomainError, Note, NoteId};
use tracing::{error, info, instrument, warn};

/// Sends create/update/delete requests and re-fetches the whole collection
/// after each successful one.
///
/// The store is never patched locally: what it holds is always the result of
/// the last successful `GET /notes`. Failures are logged and returned without
/// retry.
pub struct MutationDispatcher<R: NoteRepository> {
    repository: R,
    store: NoteStore,
}

impl<R: NoteRepository> MutationDispatcher<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            store: NoteStore::new(),
        }
    }

    /// Initial fetch, as done when the list view is first shown
    pub fn load(&mut self) -> Result<&[Note], DomainError> {
        self.store.refresh(&mut self.repository)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, form: &mut NoteForm) -> Result<Option<Note>, DomainError> {
        let draft = form.to_draft().inspect_err(|e| {
            warn!(error = %e, "Refusing to submit incomplete note");
        })?;

        let created = self.repository.create_note(&draft).inspect_err(|e| {
            error!(error = %e, "Error during note creation");
        })?;
        info!("Note created successfully");

        form.reset();
        self.refresh_after("added")?;
        Ok(created)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn update(
        &mut self,
        id: &NoteId,
        form: &mut NoteForm,
    ) -> Result<Option<Note>, DomainError> {
        let draft = form.to_draft().inspect_err(|e| {
            warn!(error = %e, "Refusing to submit incomplete note");
        })?;

        let updated = self.repository.update_note(id, &draft).inspect_err(|e| {
            error!(note_id = %id, error = %e, "Error while updating the note");
        })?;
        info!(note_id = %id, "Note updated successfully");

        form.reset();
        self.refresh_after("updated")?;
        Ok(updated)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.repository.delete_note(id).inspect_err(|e| {
            error!(note_id = %id, error = %e, "Error deleting note");
        })?;
        info!(note_id = %id, "Note deleted");

        self.refresh_after("deleted")
    }

    /// Re-fetch following a mutation the server already accepted
    fn refresh_after(&mut self, action: &'static str) -> Result<(), DomainError> {
        self.store
            .refresh(&mut self.repository)
            .map(|_| ())
            .map_err(|e| DomainError::RefreshAfterMutation {
                action,
                source: Box::new(e),
            })
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
