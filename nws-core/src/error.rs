use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the NWS API or reading user input.
///
/// Bad user input (unknown state code, zero latitude, ...) is never an
/// `NwsError`; those are handled by asking again.
#[derive(Debug, Error)]
pub enum NwsError {
    /// The server answered with a non-2xx status.
    #[error("request to {url} failed with status {status}")]
    RequestFailed { url: String, status: StatusCode },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed JSON, or a required field missing / of the wrong type.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    /// The input stream broke or was closed.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}

impl NwsError {
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Shorthand for "stdin was closed".
    pub fn end_of_input() -> Self {
        Self::Input(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ))
    }
}

pub type Result<T> = std::result::Result<T, NwsError>;
