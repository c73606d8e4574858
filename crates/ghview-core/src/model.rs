// ── Domain model ──

/// A fetched GitHub user, reduced to what the profile view shows.
///
/// Immutable once built; a new navigation replaces it rather than
/// mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl Profile {
    /// Build a profile, falling back to `username` when the display name is
    /// missing or blank.
    pub fn new(
        username: impl Into<String>,
        display_name: Option<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        let username = username.into();
        let display_name = display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| username.clone());
        Self {
            username,
            display_name,
            avatar_url: avatar_url.into(),
        }
    }
}
