// Wire types for the GitHub REST API.
//
// Only the fields the profile view needs are modelled; serde ignores the rest.

use serde::Deserialize;

/// A user record from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub login: String,
    /// Display name. GitHub sends `null` when the user never set one.
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
}

/// Error body GitHub attaches to non-success responses:
/// `{"message": "Not Found", "documentation_url": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
