//! All possible UI actions. Actions are the sole mechanism for state mutation.

use ghview_core::Resolution;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    /// Route to a path, e.g. `/profile/joshua%20ai`.
    Navigate(String),
    Back,
    Forward,

    // ── Search ────────────────────────────────────────────────────
    FocusSearch,
    BlurSearch,

    // ── Data ──────────────────────────────────────────────────────
    ProfileResolved(Resolution),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,
}
