// src/domain/mod.rs
pub mod error;
pub mod filter;
pub mod note;

pub use error::DomainError;
pub use filter::{filter_notes, NoteFilter};
pub use note::{Category, Note, NoteCategory, NoteDraft, NoteId};
