//! Application core: owns the event loop, the [`AppShell`] and the search box.
//!
//! Lookups run as spawned tasks; each one reports back through the action
//! channel as [`Action::ProfileResolved`], and the shell discards any result
//! that belongs to a navigation the user has already left.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use ghview_core::{AppShell, PendingFetch, ProfileFetcher, ProfileSource, Resolution};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventPump};
use crate::theme;
use crate::tui::Tui;
use crate::widgets::{search_box::SearchBoxComponent, tree};

pub struct App<S = ProfileFetcher> {
    shell: AppShell<S>,
    search: SearchBoxComponent,
    /// Path opened on startup, if not `/`.
    initial_path: Option<String>,
    running: bool,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl<S: ProfileSource> App<S> {
    pub fn new(source: S, initial_path: Option<String>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            shell: AppShell::new(Arc::new(source)),
            search: SearchBoxComponent::new(),
            initial_path: initial_path.filter(|p| !p.is_empty() && p != "/"),
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        if let Some(path) = self.initial_path.take() {
            self.action_tx.send(Action::Navigate(path))?;
        }

        let mut events = EventPump::spawn(
            Duration::from_millis(100), // spinner
            Duration::from_millis(33),  // ~30 FPS
        );

        info!("event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Paste(text) => {
                    if !self.search.focused() {
                        self.action_tx.send(Action::FocusSearch)?;
                    }
                    self.search.paste(&text);
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(action)?;
                if !self.running {
                    break;
                }
            }

            if self.running {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        events.stop();
        tui.exit();
        info!("event loop ended");
        Ok(())
    }

    /// Map a key to an action. The search box gets every key while focused.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.search.focused() {
            return self.search.handle_key_event(key);
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        let action = match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE, KeyCode::Char('?')) => Some(Action::ToggleHelp),
            (KeyModifiers::NONE, KeyCode::Char('/' | 'i')) => Some(Action::FocusSearch),
            (KeyModifiers::NONE, KeyCode::Char('h')) => Some(Action::Navigate("/".into())),
            (KeyModifiers::ALT, KeyCode::Left)
            | (KeyModifiers::NONE | KeyModifiers::ALT, KeyCode::Char('b')) => Some(Action::Back),
            (KeyModifiers::ALT, KeyCode::Right)
            | (KeyModifiers::NONE | KeyModifiers::ALT, KeyCode::Char('f')) => Some(Action::Forward),
            _ => None,
        };
        Ok(action)
    }

    fn process_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Resize(w, h) => debug!(w, h, "terminal resized"),
            Action::Tick => {
                if self.shell.is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::Render => {}
            Action::Navigate(path) => {
                self.search.set_focused(false);
                let pending = self.shell.navigate(&path);
                self.spawn_fetch(pending);
            }
            Action::Back => {
                let pending = self.shell.back();
                self.spawn_fetch(pending);
            }
            Action::Forward => {
                let pending = self.shell.forward();
                self.spawn_fetch(pending);
            }
            Action::FocusSearch => {
                self.help_visible = false;
                self.search.set_focused(true);
            }
            Action::BlurSearch => self.search.set_focused(false),
            Action::ProfileResolved(resolution) => self.apply(resolution),
            Action::ToggleHelp => self.help_visible = !self.help_visible,
        }
        Ok(())
    }

    /// Run a lookup in the background and post the result as an action.
    fn spawn_fetch(&self, pending: Option<PendingFetch<S>>) {
        let Some(pending) = pending else {
            return;
        };
        debug!(seq = pending.seq(), username = pending.username(), "spawning profile fetch");
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let resolution = pending.run().await;
            // Receiver is gone only after shutdown.
            let _ = tx.send(Action::ProfileResolved(resolution));
        });
    }

    fn apply(&mut self, resolution: Resolution) {
        let (seq, username) = (resolution.seq, resolution.username.clone());
        if !self.shell.apply(resolution) {
            debug!(seq, %username, current = self.shell.seq(), "dropping stale profile result");
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [search_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.search.render(frame, search_area);
        self.render_content(frame, content_area);
        self.render_status_bar(frame, status_area);

        if self.help_visible {
            render_help_overlay(frame, frame.area());
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.shell.route().label()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let lines = tree::lines(&self.shell.view());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(area);

        if self.shell.is_loading() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(format!(" {}", self.shell.current_path()))
                .style(Style::default().fg(theme::TEXT))
                .throbber_style(Style::default().fg(theme::ACCENT_PURPLE));
            frame.render_stateful_widget(throbber, left, &mut self.throbber_state.clone());
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(self.shell.current_path().to_owned(), theme::key_hint()),
                ])),
                left,
            );
        }

        let hints = if self.search.focused() {
            "Enter search  Esc cancel "
        } else {
            "/ search  ⌥← back  ? help  q quit "
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, theme::key_hint()))
                .alignment(ratatui::layout::Alignment::Right),
            right,
        );
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 46u16.min(area.width.saturating_sub(4));
    let height = 14u16.min(area.height.saturating_sub(2));
    let help_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    let row = |key: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), theme::key_hint_key()),
            Span::styled(what, theme::key_hint()),
        ])
    };

    let text = vec![
        Line::from(""),
        row("/", "Search for a user"),
        row("Enter", "Open profile"),
        row("Esc", "Leave search / close"),
        row("Alt+← / b", "Back"),
        row("Alt+→ / f", "Forward"),
        row("h", "Home"),
        row("?", "Toggle help"),
        row("q / Ctrl+C", "Quit"),
    ];

    frame.render_widget(Paragraph::new(text).block(block), help_area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use ghview_core::{ErrorKind, Profile, Route, ViewState};

    use super::*;

    struct Fixed;

    impl ProfileSource for Fixed {
        async fn fetch_profile(&self, username: &str) -> Result<Profile, ErrorKind> {
            if username == "ghost" {
                Err(ErrorKind::NotFound)
            } else {
                Ok(Profile::new(username, None, "https://x/a.png"))
            }
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::ALT)
    }

    /// Drain the action queue, waiting for spawned fetches to report back.
    async fn settle(app: &mut App<Fixed>) {
        loop {
            while let Ok(action) = app.action_rx.try_recv() {
                app.process_action(action).unwrap();
            }
            if !app.shell.is_loading() {
                break;
            }
            let action = app.action_rx.recv().await.unwrap();
            app.process_action(action).unwrap();
        }
    }

    async fn type_and_submit(app: &mut App<Fixed>, text: &str) {
        let focus = app.handle_key_event(key(KeyCode::Char('/'))).unwrap().unwrap();
        app.process_action(focus).unwrap();
        for c in text.chars() {
            assert_eq!(app.handle_key_event(key(KeyCode::Char(c))).unwrap(), None);
        }
        let submit = app.handle_key_event(key(KeyCode::Enter)).unwrap().unwrap();
        app.process_action(submit).unwrap();
    }

    #[test]
    fn global_keys() {
        let mut app = App::new(Fixed, None);
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Quit)
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('/'))).unwrap(),
            Some(Action::FocusSearch)
        );
        assert_eq!(
            app.handle_key_event(alt(KeyCode::Left)).unwrap(),
            Some(Action::Back)
        );
        assert_eq!(
            app.handle_key_event(alt(KeyCode::Char('f'))).unwrap(),
            Some(Action::Forward)
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('h'))).unwrap(),
            Some(Action::Navigate("/".into()))
        );
    }

    #[test]
    fn plain_b_and_f_walk_history() {
        let mut app = App::new(Fixed, None);
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('b'))).unwrap(),
            Some(Action::Back)
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('f'))).unwrap(),
            Some(Action::Forward)
        );
        assert_eq!(
            app.handle_key_event(alt(KeyCode::Right)).unwrap(),
            Some(Action::Forward)
        );
    }

    #[test]
    fn focused_search_swallows_global_keys() {
        let mut app = App::new(Fixed, None);
        app.process_action(Action::FocusSearch).unwrap();

        assert_eq!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap(), None);
        assert_eq!(app.search.query(), "q");
        assert_eq!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::Quit)
        );
    }

    #[test]
    fn initial_root_path_is_ignored() {
        assert_eq!(App::new(Fixed, Some("/".into())).initial_path, None);
        assert_eq!(
            App::new(Fixed, Some("/profile/a".into())).initial_path,
            Some("/profile/a".into())
        );
    }

    #[tokio::test]
    async fn search_submit_loads_profile() {
        let mut app = App::new(Fixed, None);
        type_and_submit(&mut app, "joshua ai").await;

        assert!(!app.search.focused());
        assert_eq!(app.shell.current_path(), "/profile/joshua%20ai");
        assert!(app.shell.is_loading());

        settle(&mut app).await;

        match app.shell.view_state() {
            Some(ViewState::Loaded { profile }) => assert_eq!(profile.username, "joshua ai"),
            other => panic!("expected loaded profile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_lookup_then_back_home() {
        let mut app = App::new(Fixed, None);
        type_and_submit(&mut app, "ghost").await;
        settle(&mut app).await;

        assert!(matches!(
            app.shell.view_state(),
            Some(ViewState::Failed {
                error: ErrorKind::NotFound,
                ..
            })
        ));

        app.process_action(Action::Back).unwrap();
        assert_eq!(app.shell.route(), &Route::Home);
        assert!(app.shell.view_state().is_none());
    }

    #[tokio::test]
    async fn stale_resolution_is_dropped() {
        let mut app = App::new(Fixed, None);
        app.process_action(Action::Navigate("/profile/a".into()))
            .unwrap();
        let stale_seq = app.shell.seq();
        app.process_action(Action::Navigate("/profile/b".into()))
            .unwrap();

        app.process_action(Action::ProfileResolved(Resolution {
            seq: stale_seq,
            username: "a".into(),
            outcome: Ok(Profile::new("a", None, "https://x/a.png")),
        }))
        .unwrap();
        assert!(app.shell.is_loading());

        settle(&mut app).await;
        match app.shell.view_state() {
            Some(ViewState::Loaded { profile }) => assert_eq!(profile.username, "b"),
            other => panic!("expected b, got {other:?}"),
        }
    }
}
