//! Path → [`Route`] resolution and navigation history.
//!
//! Route table:
//!
//! | path                     | route                  |
//! |--------------------------|------------------------|
//! | `/` (or empty)           | [`Route::Home`]        |
//! | `/profile/<username>`    | [`Route::Profile`]     |
//! | anything else            | [`Route::NotFound`]    |
//!
//! The username segment is percent-decoded. Query strings and fragments are
//! ignored for matching.

use std::fmt;

use tracing::debug;

const PROFILE_PREFIX: &str = "/profile/";

/// Where the user is, derived purely from a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Profile(String),
    NotFound(String),
}

impl Route {
    /// Short label for the title bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile(_) => "Profile",
            Self::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Profile(username) => write!(f, "{}", crate::search::profile_path(username)),
            Self::NotFound(path) => f.write_str(path),
        }
    }
}

/// Resolve a path to a route. Total: every input maps to exactly one route.
pub fn resolve(path: &str) -> Route {
    let matched = path.split(['?', '#']).next().unwrap_or_default();

    if matched.is_empty() || matched == "/" {
        return Route::Home;
    }

    let Some(rest) = matched.strip_prefix(PROFILE_PREFIX) else {
        return Route::NotFound(path.to_owned());
    };
    let segment = rest.strip_suffix('/').unwrap_or(rest);
    if segment.is_empty() || segment.contains('/') {
        return Route::NotFound(path.to_owned());
    }

    match urlencoding::decode(segment) {
        Ok(username) if !username.is_empty() => Route::Profile(username.into_owned()),
        _ => Route::NotFound(path.to_owned()),
    }
}

/// In-memory history stack with browser-style back/forward.
///
/// Navigating after going back drops the forward entries.
#[derive(Debug, Clone)]
pub struct Router {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// A router sitting on `/`.
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_owned()],
            cursor: 0,
        }
    }

    pub fn current_path(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map_or("/", String::as_str)
    }

    pub fn current(&self) -> Route {
        resolve(self.current_path())
    }

    /// Push `path` and return its route.
    pub fn navigate(&mut self, path: &str) -> Route {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_owned());
        self.cursor = self.entries.len() - 1;
        debug!(path, depth = self.entries.len(), "router navigate");
        resolve(path)
    }

    /// Step back one entry. `None` at the start of history.
    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        debug!(path = self.current_path(), "router back");
        Some(self.current())
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self) -> Option<Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        debug!(path = self.current_path(), "router forward");
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}
