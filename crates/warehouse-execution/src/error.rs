//! Errors raised while executing a statement.

use std::time::Duration;

/// The errors that can cross the statement execution boundary. None of them
/// are retried; every variant is terminal for the statement that raised it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The warehouse answered a submit or poll request with a non-success
    /// HTTP status.
    #[error("warehouse request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    /// The request never got a well-formed HTTP answer.
    #[error("warehouse request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The submission response carried neither an inline result nor a
    /// statement handle to poll.
    #[error("statement was not accepted: {0}")]
    Submission(String),

    /// The statement reached a terminal failure state on the warehouse side.
    #[error("query {state}: {message}")]
    Query { state: String, message: String },

    /// The poll budget was exhausted before the statement finished.
    #[error("query timed out while waiting for results (waited {waited:?})")]
    Timeout { waited: Duration },
}
