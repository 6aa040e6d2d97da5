use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::motion::source::MotionSource;

/// Polls a [`MotionSource`] on a background thread and publishes changes.
///
/// The preference reads as "motion allowed" until the first poll lands;
/// `notify` fires only on actual changes. Dropping the watcher stops the
/// thread and joins it, so no notification is ever delivered after drop.
pub struct MotionWatcher {
    stop: Arc<AtomicBool>,
    latest: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MotionWatcher {
    pub fn start<S, F>(source: S, period: Duration, notify: F) -> Self
    where
        S: MotionSource + 'static,
        F: Fn(bool) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let latest = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread_latest = Arc::clone(&latest);
        // Floor the period so a zero config can never spin the thread.
        let period = period.max(Duration::from_millis(10));

        let thread = thread::spawn(move || {
            let mut last = false;
            let mut next_poll = Instant::now();
            while !thread_stop.load(Ordering::SeqCst) {
                if Instant::now() >= next_poll {
                    let reduced = source.reduced();
                    if reduced != last {
                        last = reduced;
                        thread_latest.store(reduced, Ordering::SeqCst);
                        tracing::debug!(reduced, "motion preference changed");
                        notify(reduced);
                    }
                    next_poll = Instant::now() + period;
                }
                // Sleep in short slices so drop is prompt.
                thread::sleep(period.min(Duration::from_millis(50)));
            }
        });

        Self {
            stop,
            latest,
            thread: Some(thread),
        }
    }

    /// Last observed preference; `false` until the first poll completes.
    pub fn reduced(&self) -> bool {
        self.latest.load(Ordering::SeqCst)
    }
}

impl Drop for MotionWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
