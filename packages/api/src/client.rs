//! REST client for the notes backend.
//!
//! Every operation accepts exactly one HTTP status as success (200 for the
//! list and token endpoints, 201 for create, 204 for delete). Anything else
//! (transport failure, non-2xx, or an unexpected 2xx) is an [`ApiError`],
//! which keeps the follow-up decision ("reload or not") a plain `Result`
//! match at the call site.

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Credentials, NewNote, Note, TokenPair};

/// The note operations the pages depend on.
///
/// Implemented by [`ApiClient`] over HTTP and by in-memory fakes in tests.
pub trait NotesApi {
    fn list_notes(&self) -> impl std::future::Future<Output = Result<Vec<Note>, ApiError>>;
    fn create_note(
        &self,
        input: &NewNote,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn delete_note(&self, id: i64) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// HTTP client for the notes backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// Attach the session's bearer token, when the config carries one.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let response = self
            .http
            .post(self.url("/api/token/"))
            .json(credentials)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK)?;
        Ok(response.json().await?)
    }
}

impl NotesApi for ApiClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/api/notes/")))
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK)?;
        Ok(response.json().await?)
    }

    async fn create_note(&self, input: &NewNote) -> Result<Note, ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/api/notes/")).json(input))
            .send()
            .await?;
        let response = expect_status(response, StatusCode::CREATED)?;
        Ok(response.json().await?)
    }

    async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/api/notes/delete/{id}/"))))
            .send()
            .await?;
        expect_status(response, StatusCode::NO_CONTENT)?;
        Ok(())
    }
}

/// Pass the response through only if it carries the operation's one success
/// status.
fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ApiError> {
    if response.status() == expected {
        return Ok(response);
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status().as_u16(),
        path: response.url().path().to_string(),
    })
}
