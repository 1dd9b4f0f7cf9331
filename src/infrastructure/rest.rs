// src/infrastructure/rest.rs
use crate::application::NoteRepository;
use crate::constants::NOTES_PATH;
use crate::domain::{DomainError, Note, NoteDraft, NoteId};
use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Error body returned by the note service on rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// [`NoteRepository`] backed by the note service's REST API
#[derive(Debug, Clone)]
pub struct RestNoteRepository {
    client: Client,
    notes_url: Url,
}

impl RestNoteRepository {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// `timeout` of `None` keeps the HTTP client's default
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .with_context(|| format!("Invalid note service URL: {base_url}"))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            bail!("Note service URL must be http(s): {base_url}");
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let notes_url = base
            .join(NOTES_PATH)
            .with_context(|| format!("Failed to build notes endpoint from {base_url}"))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        info!(%notes_url, "Using note service");
        Ok(Self { client, notes_url })
    }

    pub fn notes_url(&self) -> &Url {
        &self.notes_url
    }

    /// A blank id would address the collection itself, so it is refused
    fn note_url(&self, id: &NoteId) -> Result<Url, DomainError> {
        if id.as_str().trim().is_empty() {
            return Err(DomainError::InvalidNote("note id is required".to_string()));
        }
        let mut url = self.notes_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::Transport(format!("Not a base URL: {}", self.notes_url)))?
            .push(id.as_str());
        Ok(url)
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, DomainError> {
        request
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }
}

/// Map non-success statuses onto domain errors
fn check_status(response: Response, id: Option<&NoteId>) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    debug!(%status, %body, "Note service returned an error");
    Err(match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => DomainError::NoteNotFound(id.to_string()),
        (StatusCode::BAD_REQUEST, _) => DomainError::Rejected(error_message(&body)),
        _ => DomainError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        },
    })
}

fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message));
    match parsed {
        Some(message) => message,
        None if body.trim().is_empty() => "no details provided".to_string(),
        None => body.trim().to_string(),
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    let body = response
        .text()
        .map_err(|e| DomainError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))
}

/// Create/update responses are informational; the caller re-fetches anyway
fn decode_echo(response: Response) -> Option<Note> {
    match decode::<Note>(response) {
        Ok(note) => Some(note),
        Err(e) => {
            warn!(error = %e, "Response did not contain a note");
            None
        }
    }
}

impl NoteRepository for RestNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self.send(self.client.get(self.notes_url.clone()))?;
        let notes: Vec<Note> = decode(check_status(response, None)?)?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        let url = self.note_url(id)?;
        let response = self.send(self.client.get(url))?;
        decode(check_status(response, Some(id))?)
    }

    #[instrument(level = "debug", skip(self))]
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Option<Note>, DomainError> {
        let response = self.send(self.client.post(self.notes_url.clone()).json(draft))?;
        let response = check_status(response, None)?;
        Ok(decode_echo(response))
    }

    #[instrument(level = "debug", skip(self))]
    fn update_note(
        &mut self,
        id: &NoteId,
        draft: &NoteDraft,
    ) -> Result<Option<Note>, DomainError> {
        let url = self.note_url(id)?;
        let response = self.send(self.client.put(url).json(draft))?;
        let response = check_status(response, Some(id))?;
        Ok(decode_echo(response))
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let url = self.note_url(id)?;
        let response = self.send(self.client.delete(url))?;
        check_status(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, NoteCategory};
    use mockito::{Matcher, Server};
    use rstest::rstest;
    use serde_json::json;

    const NOTE_JSON: &str = r#"{
        "_id": "6750a1f3c2",
        "title": "Standup",
        "description": "Daily sync",
        "category": "Work",
        "created_at": "2024-12-04T18:30:11.000Z",
        "updated_at": "2024-12-04T18:30:11.000Z"
    }"#;

    #[test]
    fn given_base_url_without_trailing_slash_when_creating_then_builds_notes_endpoint() {
        let repo = RestNoteRepository::new("http://localhost:5000/api").unwrap();

        assert_eq!(repo.notes_url().as_str(), "http://localhost:5000/api/notes");
    }

    #[test]
    fn given_host_only_base_url_when_creating_then_builds_notes_endpoint() {
        let repo = RestNoteRepository::new("https://notes.example.com").unwrap();

        assert_eq!(repo.notes_url().as_str(), "https://notes.example.com/notes");
    }

    #[test]
    fn given_invalid_base_url_when_creating_then_fails() {
        assert!(RestNoteRepository::new("not a url").is_err());
        assert!(RestNoteRepository::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn given_id_with_reserved_characters_when_building_url_then_escapes_it() {
        let repo = RestNoteRepository::new("http://localhost:5000").unwrap();

        let url = repo.note_url(&NoteId::new("a/b c")).unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/notes/a%2Fb%20c");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn given_blank_id_when_deleting_then_rejects_without_touching_collection(#[case] id: &str) {
        // Arrange
        let mut server = Server::new();
        let collection = server
            .mock("DELETE", Matcher::Regex("^/notes/?$".to_string()))
            .expect(0)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        // Act
        let result = repo.delete_note(&NoteId::new(id));

        // Assert
        assert!(matches!(result, Err(DomainError::InvalidNote(_))));
        collection.assert();
    }

    #[test]
    fn given_blank_id_when_updating_then_rejects_without_request() {
        let mut server = Server::new();
        let any_put = server.mock("PUT", Matcher::Any).expect(0).create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();
        let draft = NoteDraft::new("Standup", "Daily sync", Category::Work);

        let result = repo.update_note(&NoteId::new(""), &draft);

        assert!(matches!(result, Err(DomainError::InvalidNote(_))));
        any_put.assert();
    }

    #[test]
    fn given_note_with_unlisted_category_when_listing_then_keeps_whole_collection() {
        // Arrange
        let misc = NOTE_JSON
            .replace("6750a1f3c2", "6750a1f3c9")
            .replace(r#""category": "Work""#, r#""category": "Misc""#);
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/notes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{NOTE_JSON},{misc}]"))
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        // Act
        let notes = repo.list_notes().unwrap();

        // Assert
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].category, NoteCategory::Other("Misc".to_string()));
        let work = crate::domain::filter_notes(&notes, "", "Work");
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].id.as_str(), "6750a1f3c2");
    }

    #[test]
    fn given_notes_on_server_when_listing_then_decodes_collection() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/notes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{NOTE_JSON}]"))
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        let notes = repo.list_notes().unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id.as_str(), "6750a1f3c2");
        assert_eq!(notes[0].category, Category::Work);
        mock.assert();
    }

    #[test]
    fn given_malformed_body_when_listing_then_returns_decode_error() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/notes")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        let result = repo.list_notes();

        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn given_missing_note_when_getting_then_returns_not_found() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/notes/missing")
            .with_status(404)
            .with_body(r#"{"error":"Note not found"}"#)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        let result = repo.get_note(&NoteId::new("missing"));

        assert!(matches!(result, Err(DomainError::NoteNotFound(id)) if id == "missing"));
    }

    #[test]
    fn given_draft_when_creating_then_posts_payload_shape() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/notes")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "title": "Standup",
                "description": "Daily sync",
                "category": "Work"
            })))
            .with_status(201)
            .with_body(NOTE_JSON)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();
        let draft = NoteDraft::new("Standup", "Daily sync", Category::Work);

        let created = repo.create_note(&draft).unwrap();

        assert_eq!(created.map(|n| n.id), Some(NoteId::new("6750a1f3c2")));
        mock.assert();
    }

    #[test]
    fn given_non_note_echo_when_creating_then_succeeds_without_note() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/notes")
            .with_status(201)
            .with_body(r#"{"message":"created"}"#)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();
        let draft = NoteDraft::new("Standup", "Daily sync", Category::Work);

        let created = repo.create_note(&draft).unwrap();

        assert!(created.is_none());
    }

    #[test]
    fn given_bad_request_when_updating_then_surfaces_server_error_message() {
        let mut server = Server::new();
        let _mock = server
            .mock("PUT", "/notes/6750a1f3c2")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Category is invalid"}"#)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();
        let draft = NoteDraft::new("Standup", "Daily sync", Category::Work);

        let result = repo.update_note(&NoteId::new("6750a1f3c2"), &draft);

        match result.expect_err("Update should be rejected") {
            DomainError::Rejected(message) => assert_eq!(message, "Category is invalid"),
            other => panic!("Expected Rejected error, got {other:?}"),
        }
    }

    #[test]
    fn given_server_failure_when_deleting_then_returns_server_error() {
        let mut server = Server::new();
        let _mock = server
            .mock("DELETE", "/notes/abc")
            .with_status(500)
            .with_body("Internal Server Error")
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        let result = repo.delete_note(&NoteId::new("abc"));

        match result.expect_err("Delete should fail") {
            DomainError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn given_existing_note_when_deleting_then_succeeds() {
        let mut server = Server::new();
        let mock = server
            .mock("DELETE", "/notes/abc")
            .with_status(200)
            .with_body(r#"{"message":"Note deleted"}"#)
            .create();
        let mut repo = RestNoteRepository::new(&server.url()).unwrap();

        repo.delete_note(&NoteId::new("abc")).unwrap();

        mock.assert();
    }

    #[test]
    fn given_unreachable_server_when_listing_then_returns_transport_error() {
        // Port 9 (discard) is closed on test hosts
        let mut repo = RestNoteRepository::new("http://127.0.0.1:9").unwrap();

        let result = repo.list_notes();

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }

    #[test]
    fn given_error_bodies_when_extracting_message_then_prefers_error_field() {
        assert_eq!(error_message(r#"{"error":"bad"}"#), "bad");
        assert_eq!(error_message(r#"{"message":"also bad"}"#), "also bad");
        assert_eq!(
            error_message(r#"{"error":"Title is required","message":"Validation failed"}"#),
            "Title is required"
        );
        assert_eq!(error_message(r#"{"status":"fail"}"#), r#"{"status":"fail"}"#);
        assert_eq!(error_message("plain text\n"), "plain text");
        assert_eq!(error_message(""), "no details provided");
    }
}
