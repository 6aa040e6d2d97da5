use std::time::Duration;

use crate::engine::Paced;
use crate::machine::{MachineEvent, MachineState, Reducer};

/// Default blink period, the familiar terminal cursor cadence.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(530);

/// Cursor blink toggle.
///
/// Runs on its own fixed-period timer, independent of any typing machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
    period: Duration,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self {
            visible: true,
            period: DEFAULT_BLINK_PERIOD,
        }
    }
}

impl MachineState for CursorBlink {}

impl CursorBlink {
    /// A zero period is lifted to the default so the blink timer can
    /// never spin.
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_BLINK_PERIOD
        } else {
            period
        };
        Self {
            visible: true,
            period,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Events consumed by [`CursorBlink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    Tick,
}

impl MachineEvent for CursorEvent {}

/// Pure transition function for the cursor blink.
pub struct CursorReducer;

impl Reducer for CursorReducer {
    type State = CursorBlink;
    type Event = CursorEvent;

    fn reduce(mut state: Self::State, event: Self::Event) -> Self::State {
        match event {
            CursorEvent::Tick => {
                state.visible = !state.visible;
            }
        }
        state
    }
}

impl Paced for CursorBlink {
    fn step(self) -> Self {
        CursorReducer::reduce(self, CursorEvent::Tick)
    }

    fn next_delay(&self) -> Option<Duration> {
        Some(self.period)
    }
}
