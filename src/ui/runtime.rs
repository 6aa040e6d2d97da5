use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use ratatui::layout::Rect;

use crate::config::MarqueeConfig;
use crate::engine::{Clock, SystemClock};
use crate::motion::{EnvMotion, MotionWatcher};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{EventHandler, UiEvent};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: MarqueeConfig, force_reduce: bool) -> anyhow::Result<()> {
    let clock = SystemClock;
    let tick_rate = config.tick_rate();
    let motion_poll = Duration::from_millis(config.motion.poll_ms);
    let motion_forced = force_reduce || config.motion.reduce.is_some();

    let (mut terminal, guard) = setup_terminal().context("terminal setup failed")?;
    let shutdown = ShutdownHandle::new();
    // Signal the input thread on every exit path, including early `?`.
    let _stop = scopeguard::guard(shutdown.clone(), |handle| handle.signal());
    let events = EventHandler::new(tick_rate, shutdown.clone());

    // Live preference updates only matter when nothing forced them.
    let _motion_watcher = if motion_forced {
        None
    } else {
        let tx = events.sender();
        Some(MotionWatcher::start(
            EnvMotion::new(),
            motion_poll,
            move |reduced| {
                let _ = tx.send(UiEvent::Motion(reduced));
            },
        ))
    };

    let mut app = App::new(config, force_reduce, clock.now())?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        app.on_resize(body.height.max(1));
    }

    tracing::info!("showcase started");
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(UiEvent::Key(key)) => handle_key(&mut app, key),
            Ok(UiEvent::Tick) => app.on_tick(clock.now()),
            Ok(UiEvent::Resize(cols, rows)) => {
                let body = body_rect(Rect {
                    x: 0,
                    y: 0,
                    width: cols,
                    height: rows,
                });
                app.on_resize(body.height.max(1));
            }
            Ok(UiEvent::Motion(reduced)) => app.set_reduced_motion(reduced),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("showcase stopped");
    drop(guard);
    Ok(())
}
