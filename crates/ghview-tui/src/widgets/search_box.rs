//! Search input shown above every page.
//!
//! Holds only the text being typed. Submission goes through
//! [`ghview_core::SearchBox::submit`], which decides whether the query is
//! usable and builds the profile path; this widget just turns that into a
//! `Navigate` action.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghview_core::SearchBox;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::debug;
use tui_input::{Input, InputRequest};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

#[derive(Debug, Default)]
pub struct SearchBoxComponent {
    input: Input,
    focused: bool,
}

impl SearchBoxComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            let c = if c == '\n' || c == '\r' { ' ' } else { c };
            self.input.handle(InputRequest::InsertChar(c));
        }
    }

    fn submit(&self) -> Option<Action> {
        let path = SearchBox::submit(self.input.value())?;
        debug!(%path, "search submitted");
        Some(Action::Navigate(path))
    }
}

impl Component for SearchBoxComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let request = match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => return Ok(self.submit()),
            (_, KeyCode::Esc) => return Ok(Some(Action::BlurSearch)),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => InputRequest::DeleteLine,
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => InputRequest::DeletePrevWord,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                InputRequest::InsertChar(c)
            }
            (_, KeyCode::Backspace) => InputRequest::DeletePrevChar,
            (_, KeyCode::Delete) => InputRequest::DeleteNextChar,
            (_, KeyCode::Left) => InputRequest::GoToPrevChar,
            (_, KeyCode::Right) => InputRequest::GoToNextChar,
            (_, KeyCode::Home) => InputRequest::GoToStart,
            (_, KeyCode::End) => InputRequest::GoToEnd,
            _ => return Ok(None),
        };
        self.input.handle(request);
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .title(" Search ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let text_style = Style::default().fg(theme::TEXT);
        let cursor_style = Style::default().fg(theme::ACCENT_CYAN);

        let value = self.input.value();
        let line = if value.is_empty() && !self.focused {
            Line::from(Span::styled(SearchBox::PLACEHOLDER, theme::placeholder()))
        } else if self.focused {
            let before: String = value.chars().take(self.input.cursor()).collect();
            let after: String = value.chars().skip(self.input.cursor()).collect();
            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled("█", cursor_style),
                Span::styled(after, text_style),
            ])
        } else {
            Line::from(Span::styled(value.to_owned(), text_style))
        };

        // Keep the cursor visible once the query outgrows the box.
        let width = block.inner(area).width.saturating_sub(1);
        let scroll = u16::try_from(self.input.visual_scroll(usize::from(width))).unwrap_or(0);

        frame.render_widget(Paragraph::new(line).scroll((0, scroll)).block(block), area);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
