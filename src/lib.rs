// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{MutationDispatcher, NoteForm, NoteRepository, NoteStore, NoteViewer};
use cli::args::{Args, Command};
use domain::{Category, DomainError, Note, NoteFilter, NoteId};
use infrastructure::{Config, ContentRenderer, RestNoteRepository};
use ports::{HtmlPresenter, TablePresenter};
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notedesk with arguments");

    let config = Config::discover(args.config.as_deref())?;
    let base_url = config.base_url(args.url.as_deref());
    let repository = RestNoteRepository::with_timeout(base_url, config.timeout())?;

    let stdout = std::io::stdout();
    execute(args.command, repository, &mut stdout.lock())
}

/// Run one command against `repository`, writing user-facing output to `out`
pub fn execute<R: NoteRepository, W: Write>(
    command: Command,
    mut repository: R,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List {
            search,
            category,
            json,
            html,
        } => {
            let search = search.unwrap_or_default();
            let filter = NoteFilter::new(&search, &category_filter(category));

            let mut store = NoteStore::new();
            store
                .refresh(&mut repository)
                .context("Failed to fetch notes")?;
            let visible = store.visible(&filter);
            info!(total = store.len(), shown = visible.len(), "Listing notes");

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            } else if html {
                let caption = caption(&search, category, visible.len(), store.len());
                let page = HtmlPresenter::new().render_dashboard(&visible, &caption);
                open_page("notes.html", &page)?;
            } else {
                write!(out, "{}", TablePresenter::new().render(&visible))?;
            }
        }

        Command::View {
            note_id,
            json,
            html,
        } => {
            let mut viewer = NoteViewer::new(repository);
            let note = viewer
                .view_note(&NoteId::new(note_id))
                .context("Failed to fetch note data")?;
            debug!(?note, "Retrieved note");

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
            } else if html {
                let page = HtmlPresenter::new().render_note(&note);
                open_page("note.html", &page)?;
            } else {
                write_note(out, &note)?;
            }
        }

        Command::Create {
            title,
            description,
            category,
        } => {
            let mut form = NoteForm {
                title,
                description,
                category: category.into(),
            };
            let mut dispatcher = MutationDispatcher::new(repository);
            let created = dispatcher
                .create(&mut form)
                .map_err(|e| mutation_error(e, "Failed to add note".to_string()))?;

            match created {
                Some(note) => writeln!(out, "Note added successfully! ({})", note.id)?,
                None => writeln!(out, "Note added successfully!")?,
            }
            write!(out, "{}", TablePresenter::new().render(dispatcher.store().notes()))?;
        }

        Command::Update {
            note_id,
            title,
            description,
            category,
        } => {
            let id = NoteId::new(note_id);
            let current = NoteViewer::new(&mut repository)
                .view_note(&id)
                .context("Failed to fetch note data")?;

            let mut form = NoteForm::from_note(&current);
            form.apply(title, description, category);

            let mut dispatcher = MutationDispatcher::new(&mut repository);
            dispatcher.update(&id, &mut form).map_err(|e| {
                mutation_error(e, "An error occurred while updating the note".to_string())
            })?;

            writeln!(out, "Note updated successfully!")?;
            write!(out, "{}", TablePresenter::new().render(dispatcher.store().notes()))?;
        }

        Command::Delete { note_id } => {
            let id = NoteId::new(note_id);
            let mut dispatcher = MutationDispatcher::new(repository);
            dispatcher
                .delete(&id)
                .map_err(|e| mutation_error(e, format!("Failed to delete note {id}")))?;

            writeln!(out, "Deleted note {id}")?;
            write!(out, "{}", TablePresenter::new().render(dispatcher.store().notes()))?;
        }
    }

    Ok(())
}

fn category_filter(category: Option<Category>) -> String {
    category.map(|c| c.to_string()).unwrap_or_default()
}

fn caption(search: &str, category: Option<Category>, shown: usize, total: usize) -> String {
    let mut criteria = Vec::new();
    if !search.is_empty() {
        criteria.push(format!("title contains \"{search}\""));
    }
    if let Some(category) = category {
        criteria.push(format!("category {category}"));
    }

    if criteria.is_empty() {
        format!("Showing all {total} notes")
    } else {
        format!("Showing {shown} of {total} notes ({})", criteria.join(", "))
    }
}

fn write_note<W: Write>(out: &mut W, note: &Note) -> Result<()> {
    let local = chrono::Local;
    writeln!(out, "{}", note.title)?;
    writeln!(out, "{}", "=".repeat(note.title.chars().count()))?;
    writeln!(out, "Category: {}", note.category)?;
    writeln!(
        out,
        "Created:  {}",
        util::text::format_timestamp(&note.created_at.with_timezone(&local))
    )?;
    writeln!(
        out,
        "Updated:  {}",
        util::text::format_timestamp(&note.updated_at.with_timezone(&local))
    )?;
    writeln!(out, "ID:       {}", note.id)?;
    writeln!(out)?;
    writeln!(out, "{}", note.description)?;
    Ok(())
}

/// Wrap a dispatcher error in `failure`, unless the server already accepted
/// the mutation and only the re-fetch failed
fn mutation_error(err: DomainError, failure: String) -> anyhow::Error {
    match err {
        DomainError::RefreshAfterMutation { .. } => anyhow::Error::new(err),
        other => anyhow::Error::new(other).context(failure),
    }
}

fn open_page(file_name: &str, html: &str) -> Result<()> {
    let mut renderer = ContentRenderer::new();
    let path = renderer.create_temp_file(file_name, html)?;
    renderer.open_in_browser(&path)
}
