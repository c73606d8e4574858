// GitHub users HTTP client
//
// Wraps `reqwest::Client` with base-URL-relative path construction, status
// classification, and body decoding. One call issues exactly one request;
// there is no retry or caching layer here.

use reqwest::header::ACCEPT;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{ErrorBody, UserResponse};
use crate::transport::TransportConfig;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Longest body excerpt carried in error messages.
const BODY_PREVIEW_CHARS: usize = 200;

/// Raw HTTP client for `{base_url}/users/{username}`.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GithubClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API root, e.g. `https://api.github.com` or a
    /// GitHub Enterprise prefix like `https://ghe.example.com/api/v3`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/users/{username}`.
    ///
    /// The username is pushed as a single path segment, so reserved
    /// characters (`/`, `?`, `#`, space, `%`) are percent-encoded and can
    /// never escape into another part of the URL.
    pub fn user_url(&self, username: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::UnusableBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch a single user record.
    pub async fn get_user(&self, username: &str) -> Result<UserResponse, Error> {
        if username.is_empty() {
            return Err(Error::EmptyUsername);
        }

        let url = self.user_url(username)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        trace!(%status, "user response");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

/// Pull GitHub's `message` out of an error body, falling back to the
/// status reason or a body excerpt.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_owned();
    }
    preview(body)
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
