//! Console rendering of fetch outcomes.
//!
//! Nothing is truncated or paged: the whole body is written as received.

use crate::error::{ErrorKind, FetchError};
use crate::fetch::Page;
use std::io::{self, Write};

/// Hint printed after every failure other than a timeout.
pub const RETRY_HINT: &str = "Please try a different URL.";

/// Hint printed after a timeout.
pub const TIMEOUT_HINT: &str = "Consider increasing the timeout value and try again.";

/// Print status, source URL, headers (received order) and the body.
pub fn present_page<W: Write>(out: &mut W, url: &str, page: &Page) -> io::Result<()> {
    writeln!(out, "\nStatus Code: {}", page.status)?;
    writeln!(out, "Content fetched successfully from {url}!\n")?;
    writeln!(out, "Response headers:")?;
    for (name, value) in &page.headers {
        writeln!(out, "{name}: {value}")?;
    }
    writeln!(out, "\nHTML Code:")?;
    writeln!(out, "{}", page.body)?;
    out.flush()
}

/// Print the kind-specific message followed by the matching hint.
pub fn present_failure<W: Write>(out: &mut W, err: &FetchError) -> io::Result<()> {
    writeln!(out, "\n{}", failure_message(err))?;
    writeln!(out, "{}", failure_hint(err.kind))?;
    out.flush()
}

/// The user-facing line for a failure.
pub fn failure_message(err: &FetchError) -> String {
    let detail = &err.message;
    match err.kind {
        ErrorKind::InvalidUrl => {
            "The URL provided is not valid. Check the URL format and try again.".to_string()
        }
        ErrorKind::ContentDecoding => {
            "Error decoding the response content. The content may be corrupted.".to_string()
        }
        ErrorKind::Http => format!("HTTP error occurred: {detail}"),
        ErrorKind::Connection => format!("Connection error occurred: {detail}"),
        ErrorKind::Timeout => format!("Timeout error occurred: {detail}"),
        ErrorKind::ChunkedEncoding => format!("Chunked transfer error occurred: {detail}"),
        ErrorKind::Other => format!("An error occurred: {detail}"),
    }
}

pub fn failure_hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Timeout => TIMEOUT_HINT,
        _ => RETRY_HINT,
    }
}
