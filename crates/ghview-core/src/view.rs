//! Pure rendering of application state into a [`Node`] tree.
//!
//! Nothing here performs I/O or reads clocks: the same input always yields a
//! structurally equal tree. The terminal front end maps each [`Class`] to a
//! style and each [`Node`] to lines on screen.

use crate::error::ErrorKind;
use crate::model::Profile;
use crate::search::SearchBox;
use crate::state::ViewState;

/// Semantic role of a node, mapped to a style by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Home,
    Prompt,
    Hint,
    Featured,
    User,
    UserImage,
    UserName,
    UserHandle,
    Status,
    Error,
    NotFound,
}

/// One element of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Block { class: Class, children: Vec<Node> },
    Image { class: Class, src: String },
    Text { class: Class, text: String },
}

impl Node {
    fn block(class: Class, children: Vec<Node>) -> Self {
        Self::Block { class, children }
    }

    fn text(class: Class, text: impl Into<String>) -> Self {
        Self::Text {
            class,
            text: text.into(),
        }
    }

    fn image(class: Class, src: impl Into<String>) -> Self {
        Self::Image {
            class,
            src: src.into(),
        }
    }

    /// Depth-first iterator over every node in the tree, root first.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Self::Block { children, .. } = node {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }

    /// Sources of every image in the tree.
    pub fn image_sources(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|node| match node {
                Self::Image { src, .. } => Some(src.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text content of every text node in the tree.
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|node| match node {
                Self::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Users shown on the home page before any search.
pub const FEATURED_USERS: [(&str, &str); 2] = [
    (
        "Joshua A I",
        "https://avatars1.githubusercontent.com/u/22121420?v=3&s=200",
    ),
    (
        "Charles Agyemang",
        "https://avatars2.githubusercontent.com/u/13587838?v=3&s=200",
    ),
];

/// A user card: avatar, name, and optional `@handle`.
fn user_card(name: &str, avatar_url: &str, handle: Option<&str>) -> Node {
    let mut children = vec![
        Node::image(Class::UserImage, avatar_url),
        Node::text(Class::UserName, name),
    ];
    if let Some(handle) = handle {
        children.push(Node::text(Class::UserHandle, format!("@{handle}")));
    }
    Node::block(Class::User, children)
}

fn profile_card(profile: &Profile) -> Node {
    user_card(
        &profile.display_name,
        &profile.avatar_url,
        Some(&profile.username),
    )
}

/// Human-readable message for a failed lookup.
pub fn failure_message(error: ErrorKind, username: &str) -> String {
    match error {
        ErrorKind::NotFound => format!("User {username} not found"),
        ErrorKind::NetworkError => "Could not reach the profile service".to_owned(),
        ErrorKind::ServerError => "The profile service returned an error".to_owned(),
        ErrorKind::ParseError => "The profile service sent an unreadable response".to_owned(),
    }
}

/// Render a profile view state.
pub fn render(state: &ViewState) -> Node {
    match state {
        ViewState::Loading { requested_username } => Node::text(
            Class::Status,
            format!("Loading {requested_username}..."),
        ),
        ViewState::Loaded { profile } => profile_card(profile),
        ViewState::Failed {
            requested_username,
            error,
        } => Node::block(
            Class::Error,
            vec![
                Node::text(Class::Error, failure_message(*error, requested_username)),
                Node::text(Class::Hint, "Search again to try another user"),
            ],
        ),
    }
}

/// Home page: search prompt and the featured users.
pub fn render_home() -> Node {
    let featured = FEATURED_USERS
        .iter()
        .map(|(name, avatar)| user_card(name, avatar, None))
        .collect();

    Node::block(
        Class::Home,
        vec![
            Node::text(Class::Prompt, "Enter a Github Username"),
            Node::text(Class::Hint, SearchBox::PLACEHOLDER),
            Node::block(Class::Featured, featured),
        ],
    )
}

/// Error page for an unmatched path.
pub fn render_not_found(path: &str) -> Node {
    Node::block(
        Class::NotFound,
        vec![
            Node::text(Class::Error, "Page not found"),
            Node::text(Class::Hint, format!("Nothing lives at {path}")),
        ],
    )
}
