//! HTTP status text for error reports.

/// Canonical reason phrase, used when the server sent none (HTTP/2).
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        418 => "I'm a teapot",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        _ => "Unknown",
    }
}

/// True for statuses reported as failures (4xx and 5xx).
pub fn is_error_status(code: u16) -> bool {
    code >= 400
}

/// Detail line for an error status, e.g. `404 Client Error: Not Found for url: https://x/`.
pub fn http_error_detail(code: u16, reason: Option<&str>, url: &str) -> String {
    let side = if code >= 500 { "Server" } else { "Client" };
    let reason = reason.unwrap_or_else(|| reason_phrase(code));
    format!("{code} {side} Error: {reason} for url: {url}")
}
