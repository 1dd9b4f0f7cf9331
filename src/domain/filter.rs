// src/domain/filter.rs
use crate::domain::Note;

/// Title-substring and category predicate over a note collection.
///
/// An empty search matches every title and an empty category matches every
/// category. Otherwise the category must equal the stored name exactly, so a
/// note filed under a name outside the known set only matches that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    search: String,
    category: String,
}

impl NoteFilter {
    pub fn new(search: &str, category: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            category: category.to_string(),
        }
    }

    /// Filter that lets every note through
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, note: &Note) -> bool {
        let title_match = note.title.to_lowercase().contains(&self.search);
        let category_match = self.category.is_empty() || note.category.as_str() == self.category;
        title_match && category_match
    }

    /// Ordered subsequence of `notes` accepted by this filter
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        notes.iter().filter(|n| self.matches(n)).cloned().collect()
    }
}

pub fn filter_notes(notes: &[Note], search: &str, category: &str) -> Vec<Note> {
    NoteFilter::new(search, category).apply(notes)
}
