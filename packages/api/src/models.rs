use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as returned by the backend.
///
/// `id` and `created_at` are server-assigned; the client never fabricates
/// either. The shape is defined independently of the mock server; the
/// integration tests catch schema drift between the two crates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creation date the way the note card displays it.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Payload for creating a note. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Login payload for the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access/refresh pair issued by the token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_deserializes_backend_json() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","content":"x","created_at":"2026-08-07T09:30:00.123456Z"}"#,
        )
        .unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "x");
        assert_eq!(note.created_label(), "Aug 7, 2026");
    }

    #[test]
    fn new_note_serializes_title_and_content_only() {
        let input = NewNote {
            title: "T".to_string(),
            content: "C".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "content": "C"}));
    }

    #[test]
    fn token_pair_parses_both_fields() {
        let pair: TokenPair = serde_json::from_str(r#"{"access":"a","refresh":"r"}"#).unwrap();
        assert_eq!(pair.access, "a");
        assert_eq!(pair.refresh, "r");
    }
}
