// ── Core error taxonomy ──
//
// The only failure vocabulary the UI sees. Transport-level detail from
// `ghview_api::Error` is logged at the fetch boundary and then collapsed
// into one of these four kinds.

use thiserror::Error;

/// Why a profile lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// No response at all: connection refused, DNS failure, timeout.
    #[error("network error")]
    NetworkError,

    /// The user does not exist (HTTP 404).
    #[error("user not found")]
    NotFound,

    /// The server answered with an error status other than 404.
    #[error("server error")]
    ServerError,

    /// A success response whose body could not be decoded as a user.
    #[error("malformed response")]
    ParseError,
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<&ghview_api::Error> for ErrorKind {
    fn from(err: &ghview_api::Error) -> Self {
        use ghview_api::Error as ApiError;

        match err {
            _ if err.is_not_found() => ErrorKind::NotFound,
            ApiError::Transport(e) if e.is_decode() => ErrorKind::ParseError,
            _ if err.is_transport() => ErrorKind::NetworkError,
            // 5xx and every other non-2xx status (403 rate limits included)
            _ if err.status().is_some() => ErrorKind::ServerError,
            ApiError::Deserialization { .. } => ErrorKind::ParseError,
            // No request could be built.
            _ => ErrorKind::NetworkError,
        }
    }
}

impl From<ghview_api::Error> for ErrorKind {
    fn from(err: ghview_api::Error) -> Self {
        Self::from(&err)
    }
}
