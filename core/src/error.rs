//! Error types for the todo and posts API clients.
//!
//! # Design
//! `ApiError` is the single "API client failure" type: callers that only care
//! that a call failed match on the type, callers that care why match on the
//! variant. `ItemNotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status." Every other non-2xx response lands in `UnknownError`
//! with the raw status code.

/// Errors returned by the client operations and their `parse_*` halves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the requested resource does not exist.
    #[error("item not found")]
    ItemNotFound,

    /// The request never produced a usable response: the transport failed,
    /// or the body was malformed or missing.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The server returned a non-2xx status other than 404.
    #[error("unknown error: HTTP {status}")]
    UnknownError { status: u16 },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status code this failure was derived from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ItemNotFound => Some(404),
            ApiError::UnknownError { status } => Some(*status),
            ApiError::NetworkError(_) | ApiError::Serialization(_) => None,
        }
    }
}
