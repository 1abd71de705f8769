//! Pure validation of prompt answers.

use std::num::IntErrorKind;

/// Why an entered URL was refused. The Display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    #[error("The URL cannot be empty. Please enter a valid URL.")]
    Empty,
    #[error("Invalid URL format. Please ensure the URL starts with 'http://' or 'https://'.")]
    Scheme,
}

/// Why an entered timeout was refused. The Display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeoutRejection {
    #[error("Invalid timeout value. Please enter a valid integer for timeout.")]
    NotInteger,
    #[error("Timeout must be a positive integer. Please try again.")]
    NotPositive,
}

/// Accepted URL schemes. Matched case-sensitively, as typed.
pub const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Accept a non-empty URL starting with `http://` or `https://`.
pub fn validate_url(input: &str) -> Result<&str, UrlRejection> {
    let url = input.trim();
    if url.is_empty() {
        return Err(UrlRejection::Empty);
    }
    if URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(url)
    } else {
        Err(UrlRejection::Scheme)
    }
}

/// `yes` → true, `no` → false, case-insensitively; anything else → None.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Parse a timeout in whole seconds; must be an integer greater than zero.
///
/// Positive values beyond `u64::MAX` saturate rather than being refused.
pub fn parse_timeout(input: &str) -> Result<u64, TimeoutRejection> {
    let input = input.trim();
    match input.parse::<u64>() {
        Ok(0) => Err(TimeoutRejection::NotPositive),
        Ok(secs) => Ok(secs),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        // Not an unsigned integer: either a negative one or not a number at all.
        Err(_) => match input.parse::<i64>() {
            Ok(_) => Err(TimeoutRejection::NotPositive),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                Err(TimeoutRejection::NotPositive)
            }
            Err(_) => Err(TimeoutRejection::NotInteger),
        },
    }
}
