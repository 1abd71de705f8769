//! Classify curl errors into fetch error kinds.

use crate::error::{ErrorKind, FetchError};

/// Classify a curl error for the user-facing report.
///
/// `chunked` says whether the response being read declared chunked transfer
/// encoding; a receive failure mid-body is then reported as a chunk problem
/// rather than a connection problem.
pub fn classify_curl_error(e: &curl::Error, chunked: bool) -> ErrorKind {
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return ErrorKind::InvalidUrl;
    }
    if e.is_bad_content_encoding() {
        return ErrorKind::ContentDecoding;
    }
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_partial_file() || (chunked && e.is_recv_error()) {
        return ErrorKind::ChunkedEncoding;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Human-readable detail for a curl error: libcurl's own message when it has one.
pub fn describe_curl_error(e: &curl::Error) -> String {
    match e.extra_description() {
        Some(extra) if !extra.is_empty() => extra.to_string(),
        _ => e.description().to_string(),
    }
}

/// Classify and describe in one step.
pub fn fetch_error(e: &curl::Error, chunked: bool) -> FetchError {
    FetchError::new(classify_curl_error(e, chunked), describe_curl_error(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(code: u32, chunked: bool) -> ErrorKind {
        classify_curl_error(&curl::Error::new(code as _), chunked)
    }

    #[test]
    fn malformed_and_unsupported_are_invalid_url() {
        assert_eq!(kind(3, false), ErrorKind::InvalidUrl);
        assert_eq!(kind(1, false), ErrorKind::InvalidUrl);
    }

    #[test]
    fn timeout_is_timeout() {
        assert_eq!(kind(28, false), ErrorKind::Timeout);
        assert_eq!(kind(28, true), ErrorKind::Timeout);
    }

    #[test]
    fn connect_and_resolve_are_connection() {
        assert_eq!(kind(6, false), ErrorKind::Connection);
        assert_eq!(kind(7, false), ErrorKind::Connection);
        assert_eq!(kind(52, false), ErrorKind::Connection);
        assert_eq!(kind(35, false), ErrorKind::Connection);
    }

    #[test]
    fn recv_error_depends_on_chunked() {
        assert_eq!(kind(56, false), ErrorKind::Connection);
        assert_eq!(kind(56, true), ErrorKind::ChunkedEncoding);
    }

    #[test]
    fn partial_file_is_chunked_encoding() {
        assert_eq!(kind(18, false), ErrorKind::ChunkedEncoding);
    }

    #[test]
    fn bad_content_encoding_is_decoding() {
        assert_eq!(kind(61, false), ErrorKind::ContentDecoding);
    }

    #[test]
    fn too_many_redirects_is_other() {
        assert_eq!(kind(47, false), ErrorKind::Other);
    }

    #[test]
    fn description_falls_back_to_generic_text() {
        let e = curl::Error::new(28 as _);
        assert!(!describe_curl_error(&e).is_empty());
    }
}
