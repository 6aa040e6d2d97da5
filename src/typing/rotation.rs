use std::time::Duration;

use crate::engine::Paced;
use crate::machine::{MachineEvent, MachineState, Reducer};
use crate::typing::options::{OptionsError, RotationOptions};
use crate::typing::state::{prefix, TypingPhase};

/// Multi-string typewriter cycling through its strings forever.
///
/// Each string is typed, held, then erased at the erase cadence; reaching
/// empty advances the index (wrapping) and typing resumes on the next
/// string. The machine never halts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RotationMachine {
    options: RotationOptions,
    index: usize,
    phase: TypingPhase,
    delay_ticks_left: u32,
    shown: usize,
    passes_done: u64,
}

impl MachineState for RotationMachine {}

impl RotationMachine {
    pub fn new(options: RotationOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let delay_ticks_left = options.delay_ticks();
        let phase = if delay_ticks_left == 0 {
            TypingPhase::Typing
        } else {
            TypingPhase::Waiting
        };
        Ok(Self {
            options,
            index: 0,
            phase,
            delay_ticks_left,
            shown: 0,
            passes_done: 0,
        })
    }

    pub fn options(&self) -> &RotationOptions {
        &self.options
    }

    /// Index of the string currently being typed or erased.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Characters currently revealed.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Completed typing passes across all strings.
    pub fn passes_done(&self) -> u64 {
        self.passes_done
    }

    /// The string the machine is currently working through.
    pub fn current_text(&self) -> &str {
        self.options
            .strings
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Currently revealed prefix of the current string.
    pub fn shown_text(&self) -> &str {
        prefix(self.current_text(), self.shown)
    }

    fn current_chars(&self) -> usize {
        self.current_text().chars().count()
    }
}

/// Events consumed by [`RotationMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationEvent {
    /// One timer tick at the machine's current cadence.
    Tick,
}

impl MachineEvent for RotationEvent {}

/// Pure transition function for the rotating typewriter.
pub struct RotationReducer;

impl Reducer for RotationReducer {
    type State = RotationMachine;
    type Event = RotationEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            RotationEvent::Tick => tick(state),
        }
    }
}

fn tick(mut state: RotationMachine) -> RotationMachine {
    let chars = state.current_chars();
    match state.phase {
        TypingPhase::Waiting => {
            state.delay_ticks_left = state.delay_ticks_left.saturating_sub(1);
            if state.delay_ticks_left == 0 {
                state.phase = TypingPhase::Typing;
            }
        }
        TypingPhase::Typing => {
            if chars == 0 {
                // An empty entry still counts as a completed pass.
                state.passes_done += 1;
                state.phase = TypingPhase::Holding;
            } else {
                state.shown = (state.shown + 1).min(chars);
                if state.shown == chars {
                    state.passes_done += 1;
                    state.phase = TypingPhase::Holding;
                }
            }
        }
        TypingPhase::Holding => {
            state.phase = TypingPhase::Erasing;
        }
        TypingPhase::Erasing => {
            state.shown = state.shown.saturating_sub(1);
            if state.shown == 0 {
                state.index = (state.index + 1) % state.options.strings.len().max(1);
                state.phase = TypingPhase::Typing;
            }
        }
        TypingPhase::Done => {
            // A rotation never halts; only a hand-built default state can
            // carry this phase.
        }
    }
    state
}

impl Paced for RotationMachine {
    fn step(self) -> Self {
        RotationReducer::reduce(self, RotationEvent::Tick)
    }

    fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            TypingPhase::Holding => Some(self.options.hold),
            TypingPhase::Erasing => Some(self.options.erase_interval()),
            _ => Some(self.options.char_interval),
        }
    }
}
