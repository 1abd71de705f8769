//! Classified fetch failures.
//!
//! A failed fetch is a value, not a panic or an abort: the session prints it
//! and moves on to the "fetch another?" prompt.

use std::fmt;

/// What went wrong with a fetch, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The transport rejected the URL (bad host syntax, unsupported scheme).
    InvalidUrl,
    /// The body could not be decoded (corrupt gzip/deflate stream).
    ContentDecoding,
    /// The server answered with a 4xx or 5xx status.
    Http,
    /// DNS, connect, TLS or socket failure.
    Connection,
    /// The request did not complete within the requested timeout.
    Timeout,
    /// The body ended early or a chunk was malformed.
    ChunkedEncoding,
    /// Anything else the transport reported.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidUrl => "invalid URL",
            ErrorKind::ContentDecoding => "content decoding",
            ErrorKind::Http => "HTTP status",
            ErrorKind::Connection => "connection",
            ErrorKind::Timeout => "timeout",
            ErrorKind::ChunkedEncoding => "chunked encoding",
            ErrorKind::Other => "request",
        };
        f.write_str(name)
    }
}

/// A fetch failure: its kind plus the transport's detail message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct FetchError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
