use std::time::Duration;

/// Everything needed for one GET, as collected from the user.
///
/// Built once per iteration by [`crate::prompt::Console::collect_parameters`]
/// and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    /// Starts with `http://` or `https://`.
    pub url: String,
    pub allow_redirects: bool,
    /// Strictly positive.
    pub timeout_secs: u64,
}

impl RequestParameters {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
