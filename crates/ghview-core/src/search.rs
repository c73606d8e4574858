// ── Search box ──
//
// Stateless: turns a raw query into a navigation request. It never fetches
// and never touches view state; the shell does both once it navigates.

use tracing::trace;

/// Path for a username's profile page, with the username percent-encoded
/// as one segment (space becomes `%20`, `/` becomes `%2F`).
pub fn profile_path(username: &str) -> String {
    format!("/profile/{}", urlencoding::encode(username))
}

/// Search submission rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBox;

impl SearchBox {
    /// Placeholder shown while the input is empty.
    pub const PLACEHOLDER: &'static str = "eg: joshuaai";

    /// Validate and encode a query.
    ///
    /// Returns the path to navigate to, or `None` for an empty or
    /// whitespace-only query. Surrounding whitespace is trimmed.
    pub fn submit(raw_query: &str) -> Option<String> {
        let query = raw_query.trim();
        if query.is_empty() {
            trace!("ignoring blank search");
            return None;
        }
        Some(profile_path(query))
    }
}
