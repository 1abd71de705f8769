//! Single HTTP GET through libcurl.
//!
//! `Fetcher` is the seam the session talks to; `CurlFetcher` is the real
//! transport. Each call makes exactly one attempt: no retry, no backoff. A
//! failed attempt comes back as a classified [`FetchError`] value.

mod classify;
mod decode;
mod handler;
mod status;

pub use classify::{classify_curl_error, describe_curl_error};
pub use decode::{charset, decode_body};
pub use handler::PageHandler;
pub use status::{http_error_detail, is_error_status, reason_phrase};

use crate::config::FetchConfig;
use crate::error::{ErrorKind, FetchError};
use crate::request::RequestParameters;
use curl::easy::Easy2;
use std::time::Duration;

/// A successful response: status, headers in received order, decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Result of one fetch.
pub type FetchOutcome = Result<Page, FetchError>;

/// Performs one GET for the given parameters.
pub trait Fetcher {
    fn fetch(&self, params: &RequestParameters) -> FetchOutcome;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, params: &RequestParameters) -> FetchOutcome {
        (**self).fetch(params)
    }
}

/// Longest total timeout handed to libcurl; fits a C `long` of seconds everywhere.
const MAX_CURL_TIMEOUT: Duration = Duration::from_secs(i32::MAX as u64);

/// libcurl-backed fetcher. A fresh Easy2 handle is used per fetch.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    config: FetchConfig,
}

impl CurlFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    fn configure(
        &self,
        easy: &mut Easy2<PageHandler>,
        params: &RequestParameters,
    ) -> Result<(), curl::Error> {
        easy.url(&params.url)?;
        easy.get(true)?;
        easy.follow_location(params.allow_redirects)?;
        if params.allow_redirects {
            easy.max_redirections(self.config.max_redirections)?;
        }
        let total = params.timeout().min(MAX_CURL_TIMEOUT);
        let connect = Duration::from_secs(self.config.connect_timeout_secs.max(1)).min(total);
        easy.connect_timeout(connect)?;
        easy.timeout(total)?;
        easy.useragent(&self.config.user_agent)?;
        if self.config.accept_compressed {
            // Empty string: every encoding libcurl was built with.
            easy.accept_encoding("")?;
        }
        Ok(())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, params: &RequestParameters) -> FetchOutcome {
        tracing::debug!(
            url = %params.url,
            allow_redirects = params.allow_redirects,
            timeout_secs = params.timeout_secs,
            "GET"
        );

        let mut easy = Easy2::new(PageHandler::default());
        if let Err(e) = self.configure(&mut easy, params) {
            return Err(report(params, classify::fetch_error(&e, false)));
        }
        if let Err(e) = easy.perform() {
            let chunked = easy.get_ref().is_chunked();
            return Err(report(params, classify::fetch_error(&e, chunked)));
        }

        let code = easy
            .response_code()
            .map_err(|e| report(params, classify::fetch_error(&e, false)))?;
        let status = u16::try_from(code).unwrap_or(u16::MAX);
        let final_url = easy
            .effective_url()
            .ok()
            .flatten()
            .map(str::to_string)
            .unwrap_or_else(|| params.url.clone());

        if is_error_status(status) {
            let detail = http_error_detail(status, easy.get_ref().reason(), &final_url);
            return Err(report(params, FetchError::new(ErrorKind::Http, detail)));
        }

        let handler = std::mem::take(easy.get_mut());
        let content_type = handler.header_value("content-type").map(str::to_string);
        let (headers, bytes) = handler.into_parts();
        let body = decode_body(&bytes, content_type.as_deref());

        tracing::info!(
            url = %params.url,
            final_url = %final_url,
            status,
            bytes = bytes.len(),
            "fetched"
        );
        Ok(Page {
            status,
            headers,
            body,
        })
    }
}

fn report(params: &RequestParameters, err: FetchError) -> FetchError {
    tracing::info!(url = %params.url, kind = ?err.kind, "fetch failed: {}", err.message);
    err
}
