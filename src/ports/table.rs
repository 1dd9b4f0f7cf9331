// src/ports/table.rs
use crate::constants::{DESCRIPTION_CELL_WIDTH, TITLE_CELL_WIDTH};
use crate::domain::Note;
use crate::util::text::{format_timestamp, pad, summarize};
use chrono::{FixedOffset, Local, Offset};

const HEADERS: [&str; 6] = [
    "ID",
    "Title",
    "Description",
    "Category",
    "Created At",
    "Updated At",
];

/// Plain-text list view for the terminal
#[derive(Debug)]
pub struct TablePresenter {
    offset: FixedOffset,
}

impl TablePresenter {
    pub fn new() -> Self {
        Self::with_offset(Local::now().offset().fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    fn cells(&self, note: &Note) -> [String; 6] {
        [
            note.id.to_string(),
            summarize(&note.title, TITLE_CELL_WIDTH),
            summarize(&note.description, DESCRIPTION_CELL_WIDTH),
            note.category.to_string(),
            format_timestamp(&note.created_at.with_timezone(&self.offset)),
            format_timestamp(&note.updated_at.with_timezone(&self.offset)),
        ]
    }

    pub fn render(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found.\n".to_string();
        }

        let rows: Vec<[String; 6]> = notes.iter().map(|n| self.cells(n)).collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[&str]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };

        let mut out = line(&HEADERS);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format!("{}\n", rule.join("  ")));
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&line(&cells));
        }
        out.push_str(&format!("\n{} note(s)\n", notes.len()));
        out
    }
}

impl Default for TablePresenter {
    fn default() -> Self {
        Self::new()
    }
}
