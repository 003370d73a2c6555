//! Full lifecycle test against the live mock server.
//!
//! Starts the mock backend on a random port, then exercises every client
//! operation over real HTTP: login, authorized CRUD, and the exact-status
//! failure paths the page's behavior hangs on.

use api::{ApiClient, ApiConfig, ApiError, Credentials, NewNote, NotesApi};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn notes_lifecycle() {
    let base = start_server().await;

    // Log in and build an authorized client from the issued token.
    let anonymous = ApiClient::new(ApiConfig::new(&base));
    let tokens = anonymous
        .login(&Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    let client = ApiClient::new(ApiConfig::new(&base).with_token(tokens.access));

    // List — empty to start.
    let notes = client.list_notes().await.unwrap();
    assert!(notes.is_empty());

    // Create two notes; the server assigns distinct ids.
    let first = client
        .create_note(&NewNote {
            title: "First".to_string(),
            content: "a".to_string(),
        })
        .await
        .unwrap();
    let second = client
        .create_note(&NewNote {
            title: "Second".to_string(),
            content: "b".to_string(),
        })
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    // The list comes back in creation order.
    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, first.id);
    assert_eq!(notes[1].id, second.id);
    assert_eq!(notes[0].title, "First");

    // Delete the first; only it disappears.
    client.delete_note(first.id).await.unwrap();
    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, second.id);

    // Deleting again is a 404, surfaced as a non-matching status.
    let err = client.delete_note(first.id).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn requests_without_a_session_are_rejected() {
    let base = start_server().await;
    let client = ApiClient::new(ApiConfig::new(&base));

    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedStatus { status: 401, .. }
    ));

    let err = client
        .create_note(&NewNote {
            title: "T".to_string(),
            content: "C".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedStatus { status: 401, .. }
    ));

    let err = client.delete_note(1).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedStatus { status: 401, .. }
    ));
}

#[tokio::test]
async fn login_with_empty_credentials_fails() {
    let base = start_server().await;
    let client = ApiClient::new(ApiConfig::new(&base));

    let err = client
        .login(&Credentials {
            username: String::new(),
            password: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedStatus { status: 401, .. }
    ));
}

#[tokio::test]
async fn transport_failure_is_not_a_status_error() {
    // Nothing is listening here.
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1"));
    let err = client.list_notes().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
