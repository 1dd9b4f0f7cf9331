// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString};

use crate::domain::DomainError;

/// Server-assigned identifier, opaque to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Work,
    Personal,
    #[default]
    Others,
}

/// Category as stored by the server.
///
/// The service checks no schema, so a note written by another client may
/// carry any string. Such notes are kept as `Other` and only ever match a
/// category filter spelling the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteCategory {
    Known(Category),
    Other(String),
}

impl NoteCategory {
    pub fn as_str(&self) -> &str {
        match self {
            NoteCategory::Known(category) => category.as_ref(),
            NoteCategory::Other(name) => name,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl Default for NoteCategory {
    fn default() -> Self {
        NoteCategory::Known(Category::default())
    }
}

impl From<Category> for NoteCategory {
    fn from(category: Category) -> Self {
        NoteCategory::Known(category)
    }
}

impl PartialEq<Category> for NoteCategory {
    fn eq(&self, other: &Category) -> bool {
        matches!(self, NoteCategory::Known(category) if category == other)
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(alias = "_id")]
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub category: NoteCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /notes` and `PUT /notes/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub category: NoteCategory,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<NoteCategory>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    /// Required-field check; whitespace-only counts as empty
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidNote("title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::InvalidNote(
                "description is required".to_string(),
            ));
        }
        if self.category.is_blank() {
            return Err(DomainError::InvalidNote("category is required".to_string()));
        }
        Ok(())
    }
}
