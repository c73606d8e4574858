//! Palette and semantic styles.

use ghview_core::Class;
use ratatui::style::{Color, Modifier, Style};

// ── Palette ───────────────────────────────────────────────────────────

pub const ACCENT_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const ACCENT_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const LINK_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const WARN_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const TEXT: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const MUTED: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

// ── Chrome ────────────────────────────────────────────────────────────

pub fn title_style() -> Style {
    Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PURPLE)
}

pub fn border_default() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD)
}

pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

// ── Visual tree classes ──────────────────────────────────────────────

/// Style for a node of the given class.
pub fn class_style(class: Class) -> Style {
    match class {
        Class::Prompt => Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
        Class::UserName => Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        Class::UserHandle | Class::Hint => Style::default().fg(MUTED),
        Class::UserImage => Style::default()
            .fg(LINK_BLUE)
            .add_modifier(Modifier::UNDERLINED),
        Class::Status => Style::default().fg(WARN_YELLOW),
        Class::Error | Class::NotFound => Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        Class::Home | Class::Featured | Class::User => Style::default().fg(TEXT),
    }
}
