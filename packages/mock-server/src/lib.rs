//! In-memory stand-in for the notes backend, used by the API client's
//! integration tests. Speaks the same paths and status codes as the real
//! service: 200 list, 201 create, 204 delete, 401 without a bearer token.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Notes live in a Vec so the list endpoint preserves creation order.
#[derive(Default)]
pub struct Db {
    notes: Vec<Note>,
    next_id: i64,
}

pub type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db::default()));
    Router::new()
        .route("/api/token/", post(issue_token))
        .route("/api/notes/", get(list_notes).post(create_note))
        .route("/api/notes/delete/{id}/", delete(delete_note))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The real backend verifies a JWT; the mock only checks that a bearer
/// token is present at all.
fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "))
}

async fn issue_token(Json(input): Json<Credentials>) -> Result<Json<TokenPair>, StatusCode> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(TokenPair {
        access: format!("access-{}", input.username),
        refresh: format!("refresh-{}", input.username),
    }))
}

async fn list_notes(
    State(db): State<SharedDb>,
    headers: HeaderMap,
) -> Result<Json<Vec<Note>>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(db.read().await.notes.clone()))
}

async fn create_note(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Json(input): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if input.title.is_empty() || input.content.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut db = db.write().await;
    db.next_id += 1;
    let note = Note {
        id: db.next_id,
        title: input.title,
        content: input.content,
        created_at: Utc::now(),
    };
    db.notes.push(note.clone());
    Ok((StatusCode::CREATED, Json(note)))
}

async fn delete_note(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut db = db.write().await;
    let before = db.notes.len();
    db.notes.retain(|note| note.id != id);
    if db.notes.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_to_json() {
        let note = Note {
            id: 1,
            title: "Test".to_string(),
            content: "Body".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["content"], "Body");
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn create_note_parses_both_fields() {
        let input: CreateNote = serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert_eq!(input.title, "T");
        assert_eq!(input.content, "C");
    }

    #[test]
    fn create_note_rejects_missing_content() {
        let result: Result<CreateNote, _> = serde_json::from_str(r#"{"title":"No body"}"#);
        assert!(result.is_err());
    }
}
