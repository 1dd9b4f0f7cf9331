// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{Category, DomainError, Note, NoteDraft, NoteId};

/// Fixed instant used for fixture timestamps
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 4, 18, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Build a note with deterministic description and timestamps
pub fn sample_note(id: &str, title: &str, category: Category) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        description: format!("Notes about {title}"),
        category: category.into(),
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone)]
pub enum MockFailure {
    Rejected(String),
    Server(u16),
    Transport,
}

impl MockFailure {
    fn into_error(self) -> DomainError {
        match self {
            MockFailure::Rejected(message) => DomainError::Rejected(message),
            MockFailure::Server(status) => DomainError::Server {
                status,
                message: "mock server failure".to_string(),
            },
            MockFailure::Transport => DomainError::Transport("connection refused".to_string()),
        }
    }
}

/// In-memory stand-in for the remote note service
///
/// Behaves like the server: assigns ids and timestamps on create, bumps
/// `updated_at` on update, and answers 404-style errors for unknown ids.
/// Single failures can be queued per operation with [`MockNoteRepository::fail_next`].
///
/// # Examples
///
/// ```
/// use notedesk::util::testing::{sample_note, MockNoteRepository};
/// use notedesk::domain::Category;
///
/// let mock = MockNoteRepository::builder()
///     .with_note(sample_note("1", "Standup", Category::Work))
///     .build();
/// assert_eq!(mock.server_notes().len(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    next_id: u64,
    clock: DateTime<Utc>,
    failures: HashMap<MockOperation, MockFailure>,
    requests: usize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Current server-side collection, in server order
    pub fn server_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of requests that reached the mock, failed ones included
    pub fn request_count(&self) -> usize {
        self.requests
    }

    /// Make the next call of `operation` fail once
    pub fn fail_next(&mut self, operation: MockOperation, failure: MockFailure) {
        self.failures.insert(operation, failure);
    }

    /// Simulate a write made by another client
    pub fn insert_server_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    fn begin(&mut self, operation: MockOperation) -> Result<(), DomainError> {
        self.requests += 1;
        match self.failures.remove(&operation) {
            Some(failure) => Err(failure.into_error()),
            None => Ok(()),
        }
    }

    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::seconds(1);
        self.clock
    }

    fn position(&self, id: &NoteId) -> Result<usize, DomainError> {
        self.notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.begin(MockOperation::List)?;
        Ok(self.notes.clone())
    }

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        self.begin(MockOperation::Get)?;
        let idx = self.position(id)?;
        Ok(self.notes[idx].clone())
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Option<Note>, DomainError> {
        self.begin(MockOperation::Create)?;
        self.next_id += 1;
        let now = self.tick();
        let note = Note {
            id: NoteId::new(format!("mock-{}", self.next_id)),
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            created_at: now,
            updated_at: now,
        };
        self.notes.push(note.clone());
        Ok(Some(note))
    }

    fn update_note(
        &mut self,
        id: &NoteId,
        draft: &NoteDraft,
    ) -> Result<Option<Note>, DomainError> {
        self.begin(MockOperation::Update)?;
        let idx = self.position(id)?;
        let now = self.tick();
        let note = &mut self.notes[idx];
        note.title = draft.title.clone();
        note.description = draft.description.clone();
        note.category = draft.category.clone();
        note.updated_at = now;
        Ok(Some(note.clone()))
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.begin(MockOperation::Delete)?;
        let idx = self.position(id)?;
        self.notes.remove(idx);
        Ok(())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    failures: HashMap<MockOperation, MockFailure>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            failures: HashMap::new(),
        }
    }

    /// Seed the server-side collection
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Queue a one-shot failure for the first call of `operation`
    pub fn with_failure(mut self, operation: MockOperation, failure: MockFailure) -> Self {
        self.failures.insert(operation, failure);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            next_id: 0,
            clock: fixture_time(),
            failures: self.failures,
            requests: 0,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "mockito", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
