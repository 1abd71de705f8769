//! Easy2 Handler that buffers one response: status line, headers, body.

/// Collects the final response of a transfer. Implements curl's Handler for Easy2.
///
/// Every `HTTP/` status line starts a new response (redirect hop, `100
/// Continue`), so headers and body from earlier hops are dropped.
#[derive(Debug, Default)]
pub struct PageHandler {
    pub(super) status_line: Option<String>,
    pub(super) headers: Vec<(String, String)>,
    pub(super) body: Vec<u8>,
}

impl PageHandler {
    /// Reason phrase from the last status line (`OK`, `Not Found`); absent on HTTP/2.
    pub fn reason(&self) -> Option<&str> {
        let line = self.status_line.as_deref()?;
        let reason = line.splitn(3, ' ').nth(2)?.trim();
        (!reason.is_empty()).then_some(reason)
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// True if the response declared `Transfer-Encoding: chunked`.
    pub fn is_chunked(&self) -> bool {
        self.header_value("transfer-encoding")
            .map(|v| v.to_ascii_lowercase().contains("chunked"))
            .unwrap_or(false)
    }

    #[cfg(test)]
    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[cfg(test)]
    fn body(&self) -> &[u8] {
        &self.body
    }

    pub(super) fn into_parts(self) -> (Vec<(String, String)>, Vec<u8>) {
        (self.headers, self.body)
    }
}

impl curl::easy::Handler for PageHandler {
    fn header(&mut self, data: &[u8]) -> bool {
        let line = String::from_utf8_lossy(data);
        let line = line.trim_end();
        if line.starts_with("HTTP/") {
            self.status_line = Some(line.to_string());
            self.headers.clear();
            self.body.clear();
        } else if let Some((name, value)) = line.split_once(':') {
            self.headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curl::easy::Handler;

    #[test]
    fn handler_keeps_headers_in_received_order() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/1.1 200 OK\r\n");
        h.header(b"Server: test\r\n");
        h.header(b"X-Zeta: last-alphabetically\r\n");
        h.header(b"Content-Type: text/html\r\n");
        h.header(b"\r\n");
        let names: Vec<&str> = h.headers().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["Server", "X-Zeta", "Content-Type"]);
        assert_eq!(h.reason(), Some("OK"));
    }

    #[test]
    fn handler_header_clears_on_http_status_line() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/1.1 302 Found\r\n");
        h.header(b"Location: http://other/\r\n");
        h.write(b"redirect body").unwrap();
        assert_eq!(h.headers().len(), 1);
        h.header(b"HTTP/1.1 200 OK\r\n");
        assert!(h.headers().is_empty(), "headers cleared on new HTTP/ line");
        assert!(h.body().is_empty(), "body cleared on new HTTP/ line");
    }

    #[test]
    fn header_values_keep_inner_colons() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/1.1 301 Moved Permanently\r\n");
        h.header(b"Location: https://example.com:8443/x\r\n");
        assert_eq!(h.header_value("location"), Some("https://example.com:8443/x"));
        assert_eq!(h.reason(), Some("Moved Permanently"));
    }

    #[test]
    fn http2_status_line_has_no_reason() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/2 404\r\n");
        assert_eq!(h.reason(), None);
    }

    #[test]
    fn chunked_detection_is_case_insensitive() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/1.1 200 OK\r\n");
        assert!(!h.is_chunked());
        h.header(b"transfer-encoding: gzip, Chunked\r\n");
        assert!(h.is_chunked());
    }

    #[test]
    fn write_appends_body() {
        let mut h = PageHandler::default();
        h.header(b"HTTP/1.1 200 OK\r\n");
        assert_eq!(h.write(b"<html>").unwrap(), 6);
        assert_eq!(h.write(b"</html>").unwrap(), 7);
        assert_eq!(h.body(), b"<html></html>");
    }
}
