/// Where the backend lives and which credential to present to it.
///
/// Passed to [`ApiClient::new`](crate::ApiClient::new) at construction; the
/// client never reads ambient auth state and never mutates the config.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    access_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Attach the session's access token; it is sent as a bearer header on
    /// every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Default for ApiConfig {
    /// Backend origin baked in at build time (`API_URL`); the web bundle has
    /// no runtime environment to read.
    fn default() -> Self {
        Self::new(option_env!("API_URL").unwrap_or("http://localhost:8000"))
    }
}
