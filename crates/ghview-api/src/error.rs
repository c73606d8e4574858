use thiserror::Error;

/// Top-level error type for the `ghview-api` crate.
///
/// Covers every failure mode of a single profile lookup: transport,
/// URL construction, non-success HTTP status, and body decoding.
/// `ghview-core` collapses these into the user-facing `ErrorKind`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Request ─────────────────────────────────────────────────────
    /// The username was empty; no request was sent.
    #[error("Username must not be empty")]
    EmptyUsername,

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be used for API requests: {0}")]
    UnusableBaseUrl(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Response ────────────────────────────────────────────────────
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::EmptyUsername => true,
            _ => false,
        }
    }

    /// Returns `true` if no usable response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status code of a non-success answer. Transport errors never
    /// carry one: statuses are classified before the body is read.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let not_found = Error::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert!(not_found.is_not_found());
        assert_eq!(not_found.status(), Some(404));

        let bad_gateway = Error::Status {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(bad_gateway.status(), Some(502));
        assert!(!bad_gateway.is_not_found());
        assert!(!bad_gateway.is_transport());

        let forbidden = Error::Status {
            status: 403,
            message: "rate limited".into(),
        };
        assert_eq!(forbidden.status(), Some(403));
        assert!(!forbidden.is_not_found());
    }

    #[test]
    fn empty_username_counts_as_not_found() {
        assert!(Error::EmptyUsername.is_not_found());
        assert_eq!(Error::EmptyUsername.status(), None);
    }
}
