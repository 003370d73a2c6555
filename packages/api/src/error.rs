use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::ApiClient) operations.
///
/// The pages treat every failure the same way (log it and keep the current
/// state), so the taxonomy stays small: either the request never completed,
/// or the server answered with something other than the one status the
/// operation accepts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a response body that did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with the operation's success status.
    /// Unexpected 2xx codes land here too.
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },
}
