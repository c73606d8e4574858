// ── Application shell ──
//
// Owns the route and the profile view state. Both are private and change
// only through navigation and `apply`; callers get read-only snapshots.
//
// Every route change bumps `seq`. A fetch started for navigation N carries
// N in its `Resolution`; `apply` drops anything whose number is not the
// current one. That is the whole cancellation story: in-flight requests are
// never aborted, their results are just ignored.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::ErrorKind;
use crate::fetcher::ProfileSource;
use crate::model::Profile;
use crate::route::{Route, Router};
use crate::state::ViewState;
use crate::view::{self, Node};

/// Outcome of a [`PendingFetch`], tagged with the navigation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub seq: u64,
    pub username: String,
    pub outcome: Result<Profile, ErrorKind>,
}

/// A profile fetch the shell has asked for but not yet started.
///
/// The caller decides where to run it (spawned task, inline `.await`, test
/// harness) and hands the [`Resolution`] back to [`AppShell::apply`].
#[derive(Debug)]
pub struct PendingFetch<S> {
    seq: u64,
    username: String,
    source: Arc<S>,
}

impl<S: ProfileSource> PendingFetch<S> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Perform the lookup. Exactly one call into the source.
    pub async fn run(self) -> Resolution {
        let outcome = self.source.fetch_profile(&self.username).await;
        Resolution {
            seq: self.seq,
            username: self.username,
            outcome,
        }
    }
}

/// Composition root: router + view state + fetch dispatch.
#[derive(Debug)]
pub struct AppShell<S> {
    router: Router,
    route: Route,
    view_state: Option<ViewState>,
    seq: u64,
    source: Arc<S>,
}

impl<S: ProfileSource> AppShell<S> {
    /// A shell sitting on the home route.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            router: Router::new(),
            route: Route::Home,
            view_state: None,
            seq: 0,
            source,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Profile view state; `Some` exactly when the route is a profile.
    pub fn view_state(&self) -> Option<&ViewState> {
        self.view_state.as_ref()
    }

    /// Current navigation sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.router.can_go_forward()
    }

    pub fn is_loading(&self) -> bool {
        self.view_state.as_ref().is_some_and(ViewState::is_loading)
    }

    /// Navigate to `path`. Returns the fetch to run when the new route is a
    /// profile.
    pub fn navigate(&mut self, path: &str) -> Option<PendingFetch<S>> {
        let route = self.router.navigate(path);
        self.enter(route)
    }

    /// Go back in history. `None` when there is nothing to go back to or the
    /// previous route needs no fetch.
    pub fn back(&mut self) -> Option<PendingFetch<S>> {
        let route = self.router.back()?;
        self.enter(route)
    }

    /// Go forward in history.
    pub fn forward(&mut self) -> Option<PendingFetch<S>> {
        let route = self.router.forward()?;
        self.enter(route)
    }

    fn enter(&mut self, route: Route) -> Option<PendingFetch<S>> {
        self.seq += 1;
        info!(seq = self.seq, %route, "route changed");

        let pending = match &route {
            Route::Profile(username) => {
                self.view_state = Some(ViewState::loading(username.clone()));
                Some(PendingFetch {
                    seq: self.seq,
                    username: username.clone(),
                    source: Arc::clone(&self.source),
                })
            }
            Route::Home | Route::NotFound(_) => {
                self.view_state = None;
                None
            }
        };

        self.route = route;
        pending
    }

    /// Apply a fetch resolution. Returns `false` when it was stale and
    /// discarded.
    pub fn apply(&mut self, resolution: Resolution) -> bool {
        if resolution.seq != self.seq {
            debug!(
                stale = resolution.seq,
                current = self.seq,
                username = %resolution.username,
                "discarding stale resolution"
            );
            return false;
        }

        let Some(state) = self.view_state.as_mut() else {
            return false;
        };
        state.resolve(&resolution.username, resolution.outcome)
    }

    /// Content tree for the current route. The search box is drawn by the
    /// front end on every route, above this tree.
    pub fn view(&self) -> Node {
        match (&self.route, &self.view_state) {
            (Route::Profile(_), Some(state)) => view::render(state),
            (Route::Profile(username), None) => view::render(&ViewState::loading(username.clone())),
            (Route::NotFound(path), _) => view::render_not_found(path),
            (Route::Home, _) => view::render_home(),
        }
    }
}
