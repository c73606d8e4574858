// ── Runtime fetch configuration ──
//
// Describes *where* profiles come from. Built by the front end from the
// config crate; core never reads config files.

use std::time::Duration;

use url::Url;

/// Public GitHub REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Configuration for [`ProfileFetcher`](crate::ProfileFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// API root; requests go to `{base_url}/users/{username}`.
    pub base_url: Url,
    /// Whole-request timeout. Expiry resolves the fetch as a network error.
    pub timeout: Duration,
}

impl FetcherConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
