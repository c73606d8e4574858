// ── Profile view state machine ──
//
//   navigate(/profile/u) ──► Loading{u}
//   Loading{u} ── Ok(p) ───► Loaded{p}
//   Loading{u} ── Err(e) ──► Failed{u, e}
//
// Loaded and Failed are terminal until the shell replaces the whole state
// on the next navigation.

use crate::error::ErrorKind;
use crate::model::Profile;

/// Fetch progress for the profile currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading {
        requested_username: String,
    },
    Loaded {
        profile: Profile,
    },
    Failed {
        requested_username: String,
        error: ErrorKind,
    },
}

impl ViewState {
    /// Initial state for a fresh profile navigation.
    pub fn loading(username: impl Into<String>) -> Self {
        Self::Loading {
            requested_username: username.into(),
        }
    }

    /// Feed a fetch outcome into the machine.
    ///
    /// Only a `Loading` state for the same username accepts an outcome.
    /// Returns whether the state changed.
    pub fn resolve(&mut self, username: &str, outcome: Result<Profile, ErrorKind>) -> bool {
        let Self::Loading { requested_username } = self else {
            return false;
        };
        if requested_username.as_str() != username {
            return false;
        }

        *self = match outcome {
            Ok(profile) => Self::Loaded { profile },
            Err(error) => Self::Failed {
                requested_username: username.to_owned(),
                error,
            },
        };
        true
    }

    /// The username this state is about.
    pub fn username(&self) -> &str {
        match self {
            Self::Loading { requested_username } | Self::Failed { requested_username, .. } => {
                requested_username
            }
            Self::Loaded { profile } => &profile.username,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// `Loaded` and `Failed` are stable until superseded.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile(name: &str) -> Profile {
        Profile::new(name, None, format!("https://x/{name}.png"))
    }

    #[test]
    fn loading_to_loaded() {
        let mut state = ViewState::loading("joshuaai");

        assert!(state.resolve("joshuaai", Ok(profile("joshuaai"))));
        assert_eq!(
            state,
            ViewState::Loaded {
                profile: profile("joshuaai")
            }
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn loading_to_failed_keeps_requested_username() {
        let mut state = ViewState::loading("doesnotexist");

        assert!(state.resolve("doesnotexist", Err(ErrorKind::NotFound)));
        assert_eq!(
            state,
            ViewState::Failed {
                requested_username: "doesnotexist".into(),
                error: ErrorKind::NotFound,
            }
        );
    }

    #[test]
    fn terminal_states_ignore_further_outcomes() {
        let mut state = ViewState::loading("a");
        state.resolve("a", Err(ErrorKind::ServerError));
        let before = state.clone();

        assert!(!state.resolve("a", Ok(profile("a"))));
        assert_eq!(state, before);
    }

    #[test]
    fn outcome_for_other_username_is_ignored() {
        let mut state = ViewState::loading("b");

        assert!(!state.resolve("a", Ok(profile("a"))));
        assert!(state.is_loading());
        assert_eq!(state.username(), "b");
    }
}
