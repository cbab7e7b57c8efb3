//! Terminal input plumbing.
//!
//! A background task blocks on crossterm and forwards the events the app
//! cares about over a channel, so the main loop only ever awaits a receiver.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// Input the application reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
}

/// Start the reader task.  It exits once the receiver is dropped.
pub fn spawn_event_reader(poll_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        // Poll with a timeout so a dropped receiver is noticed even when idle.
        if !event::poll(poll_interval).unwrap_or(false) {
            continue;
        }
        let forwarded = match event::read() {
            // Releases and repeats would double every keystroke on Windows.
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
            Ok(Event::Mouse(m)) => AppEvent::Mouse(m),
            Ok(Event::Resize(..)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(err) => {
                tracing::warn!(error = %err, "terminal event read failed");
                break;
            }
        };
        if tx.send(forwarded).is_err() {
            break;
        }
    });

    rx
}
