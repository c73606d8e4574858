//! Terminal event pump.
//!
//! A background task merges crossterm input with two timers (spinner tick
//! and redraw) into one channel the app loop awaits.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Events delivered to the app loop.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Bracketed paste; routed to the search box.
    Paste(String),
    Resize(u16, u16),
    /// Spinner animation tick.
    Tick,
    /// Redraw request.
    Render,
}

/// Handle to the background event task. Dropping it stops the task.
pub struct EventPump {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventPump {
    pub fn spawn(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);
            let mut render = tokio::time::interval(render_rate);
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
            render.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = task_cancel.cancelled() => break,
                    _ = tick.tick() => Event::Tick,
                    _ = render.tick() => Event::Render,
                    Some(Ok(raw)) = input.next() => match raw {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                        CrosstermEvent::Paste(text) => Event::Paste(text),
                        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                        _ => continue,
                    },
                };

                if tx.send(event).is_err() {
                    trace!("event receiver gone, stopping pump");
                    break;
                }
            }
        });

        Self { rx, cancel }
    }

    /// Next event, or `None` once the pump has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
