// src/application/mod.rs
pub mod mutation_dispatcher;
pub mod note_form;
pub mod note_store;
pub mod note_viewer;

pub use mutation_dispatcher::MutationDispatcher;
pub use note_form::NoteForm;
pub use note_store::NoteStore;
pub use note_viewer::{NoteRepository, NoteViewer};
