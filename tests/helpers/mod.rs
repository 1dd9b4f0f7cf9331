use mockito::{Mock, Server, ServerGuard};
use notedesk::infrastructure::RestNoteRepository;
use serde_json::{json, Value};

/// Mock note service reachable over HTTP
pub struct TestServer {
    pub server: ServerGuard,
}

#[allow(dead_code)]
impl TestServer {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn repository(&self) -> RestNoteRepository {
        RestNoteRepository::new(&self.server.url()).expect("Mock server URL should be valid")
    }

    /// `GET /notes` answering with `notes`, matched at most `hits` times
    pub fn list_returns(&mut self, notes: &[Value], hits: usize) -> Mock {
        self.server
            .mock("GET", "/notes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(notes.to_vec()).to_string())
            .expect(hits)
            .create()
    }

    pub fn get_returns(&mut self, note: &Value) -> Mock {
        let path = format!("/notes/{}", note["_id"].as_str().unwrap_or_default());
        self.server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(note.to_string())
            .create()
    }
}

/// Note as the service serialises it
pub fn note_json(id: &str, title: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("Notes about {title}"),
        "category": category,
        "created_at": "2024-12-04T18:30:00.000Z",
        "updated_at": "2024-12-04T18:30:00.000Z",
        "__v": 0
    })
}

/// Known fixture ids
#[allow(dead_code)]
pub mod test_notes {
    pub const REPORT: &str = "6750a1f3c2aa01";
    pub const GROCERIES: &str = "6750a1f3c2aa02";
    pub const PLANNING: &str = "6750a1f3c2aa03";
    pub const NONEXISTENT: &str = "000000000000";
}

#[allow(dead_code)]
pub fn seeded_notes() -> Vec<Value> {
    vec![
        note_json(test_notes::REPORT, "Quarterly Report", "Work"),
        note_json(test_notes::GROCERIES, "Groceries", "Personal"),
        note_json(test_notes::PLANNING, "Sprint planning", "Work"),
    ]
}
