use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Map a terminal event to an app event. Key releases and repeats are
/// dropped so each press moves a runner once (Windows reports all three).
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Merges terminal input with a redraw tick on one channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    task: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut ticks = tokio::time::interval(Duration::from_millis(tick_rate_ms));

            loop {
                let event = tokio::select! {
                    next = reader.next() => match next {
                        Some(Ok(raw)) => translate(raw),
                        Some(Err(_)) => None,
                        None => break,
                    },
                    _ = ticks.tick() => Some(Event::Tick),
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        EventHandler { rx, task }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        // Stop reading stdin once the TUI has exited
        self.task.abort();
    }
}
