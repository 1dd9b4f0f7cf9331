// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The mutation was applied on the server; only the re-fetch failed
    #[error("Note {action} successfully, but refreshing the list failed")]
    RefreshAfterMutation {
        action: &'static str,
        source: Box<DomainError>,
    },
}
