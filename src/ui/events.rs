use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

/// Events consumed by the showcase loop.
pub enum UiEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Motion preference changed while running.
    Motion(bool),
}

/// Background input thread feeding the main loop.
///
/// Polls terminal events with a short timeout so the shutdown flag is
/// checked often, and emits `Tick` on a fixed cadence.
pub struct EventHandler {
    rx: Receiver<UiEvent>,
    tx: mpsc::Sender<UiEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(UiEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(UiEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "input read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout, no event.
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "input poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(UiEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<UiEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.tx.clone()
    }
}
