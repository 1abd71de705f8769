//! Body bytes to text, honoring the `Content-Type` charset.

/// Extract the `charset` parameter from a `Content-Type` value, lowercased.
pub fn charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_ascii_lowercase())
    })
}

/// Decode a response body to text.
///
/// Latin-1 family charsets map each byte to the code point of the same value.
/// Everything else is read as UTF-8 with invalid sequences replaced by U+FFFD.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    match content_type.and_then(charset).as_deref() {
        Some("iso-8859-1" | "latin1" | "latin-1" | "l1" | "us-ascii" | "ascii") => {
            bytes.iter().map(|&b| char::from(b)).collect()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}
