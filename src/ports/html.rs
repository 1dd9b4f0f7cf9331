// src/ports/html.rs
use crate::domain::Note;
use crate::util::text::format_timestamp;
use chrono::{FixedOffset, Local, Offset};
use html_escape::encode_text;
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1100px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f3f4f6;
            color: #1f2937;
        }
        .card {
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        }
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th {
            background: #e5e7eb;
            text-align: left;
            font-weight: 600;
        }
        th, td {
            padding: 0.6rem 0.8rem;
            border-bottom: 1px solid #e5e7eb;
            vertical-align: top;
        }
        tr:hover td {
            background: #f9fafb;
        }
        .description {
            white-space: pre-wrap;
        }
        .category {
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 0.85em;
        }
        .note-info {
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }
        .empty {
            color: #6b7280;
            font-style: italic;
        }
"#;

/// Renders notes as standalone HTML pages
#[derive(Debug)]
pub struct HtmlPresenter {
    offset: FixedOffset,
}

impl HtmlPresenter {
    /// Timestamps shown in the local timezone
    pub fn new() -> Self {
        Self::with_offset(Local::now().offset().fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    fn timestamp(&self, note_time: &chrono::DateTime<chrono::Utc>) -> String {
        format_timestamp(&note_time.with_timezone(&self.offset))
    }

    fn page(title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
            title = encode_text(title),
        )
    }

    #[instrument(level = "trace", skip(self, note), fields(note_id = %note.id))]
    fn row(&self, note: &Note) -> String {
        format!(
            r#"            <tr>
                <td>{title}</td>
                <td class="description">{description}</td>
                <td><span class="category">{category}</span></td>
                <td>{created}</td>
                <td>{updated}</td>
                <td><code>{id}</code></td>
            </tr>"#,
            title = encode_text(&note.title),
            description = encode_text(&note.description),
            category = encode_text(note.category.as_str()),
            created = self.timestamp(&note.created_at),
            updated = self.timestamp(&note.updated_at),
            id = encode_text(note.id.as_str()),
        )
    }

    /// Dashboard table of `notes`; `caption` describes the active filter
    pub fn render_dashboard(&self, notes: &[Note], caption: &str) -> String {
        let rows = if notes.is_empty() {
            r#"            <tr><td colspan="6" class="empty">No notes</td></tr>"#.to_string()
        } else {
            notes
                .iter()
                .map(|note| self.row(note))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let body = format!(
            r#"    <div class="card">
        <h1>Notes Dashboard</h1>
        <p>{caption}</p>
        <table>
            <thead>
            <tr>
                <th>Title</th>
                <th>Description</th>
                <th>Category</th>
                <th>Created At</th>
                <th>Updated At</th>
                <th>ID</th>
            </tr>
            </thead>
            <tbody>
{rows}
            </tbody>
        </table>
    </div>"#,
            caption = encode_text(caption),
        );

        Self::page("Notes Dashboard", &body)
    }

    pub fn render_note(&self, note: &Note) -> String {
        let body = format!(
            r#"    <div class="card">
        <h1>{title}</h1>
        <span class="category">{category}</span>
        <div class="description">{description}</div>
        <div class="note-info">
            <div>Note ID: {id}</div>
            <div>Created: {created}</div>
            <div>Updated: {updated}</div>
        </div>
    </div>"#,
            title = encode_text(&note.title),
            category = encode_text(note.category.as_str()),
            description = encode_text(&note.description),
            id = encode_text(note.id.as_str()),
            created = self.timestamp(&note.created_at),
            updated = self.timestamp(&note.updated_at),
        );

        Self::page(&note.title, &body)
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}
