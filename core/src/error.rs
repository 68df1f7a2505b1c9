//! Error types for the catalog client.
//!
//! # Design
//! Every variant ends up on the same user-facing path: the view shows
//! [`GENERIC_ERROR_MESSAGE`] and the variant itself is only logged. The
//! variants still stay distinct so logs and tests can tell a bad status from
//! a bad body from a dead connection.

use thiserror::Error;

/// The only failure text ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str = "Error fetching data.";

/// Errors produced while fetching and decoding the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("transport failed: {0}")]
    TransportError(String),
}

impl CatalogError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}
