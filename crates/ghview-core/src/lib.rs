//! UI-independent core of ghview: routing, profile fetch state, and the
//! visual tree the terminal front end draws.
//!
//! - **[`AppShell`]**: Owns the current [`Route`] and [`ViewState`]. Every
//!   navigation bumps a sequence number; fetch resolutions carrying an older
//!   number are dropped, so a slow response can never overwrite a newer one.
//!
//! - **[`Router`]**: Maps paths (`/`, `/profile/<username>`, anything else)
//!   to [`Route`]s and keeps back/forward history.
//!
//! - **[`ProfileSource`]**: The fetch seam. [`ProfileFetcher`] implements it
//!   over `ghview-api`; tests substitute in-memory sources.
//!
//! - **[`view`]**: Pure functions from state to a [`Node`] tree.
//!
//! - **[`SearchBox`]**: Turns a raw query into a profile path.

pub mod config;
pub mod convert;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod route;
pub mod search;
pub mod shell;
pub mod state;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::FetcherConfig;
pub use error::ErrorKind;
pub use fetcher::{ProfileFetcher, ProfileSource};
pub use model::Profile;
pub use route::{Route, Router};
pub use search::SearchBox;
pub use shell::{AppShell, PendingFetch, Resolution};
pub use state::ViewState;
pub use view::{Class, Node};
