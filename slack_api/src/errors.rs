//! Error types for the Slack client.

/// Errors that can occur when calling the Slack Web API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unparseable response).
    #[error("Request failed")]
    RequestFailed,
    /// Slack returned a non-success HTTP status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// Slack answered `"ok": false` with the given error code.
    #[error("Slack API error: {0}")]
    Api(String),
}
