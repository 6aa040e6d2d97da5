use std::time::Duration;

use crate::engine::Paced;
use crate::machine::{MachineEvent, MachineState, Reducer as _};
use crate::typing::options::{OptionsError, TypingOptions};
use crate::typing::reducer::TypingReducer;

/// Phase of a typing sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingPhase {
    /// Consuming the configured start delay.
    #[default]
    Waiting,
    /// Revealing one character per tick.
    Typing,
    /// Fully revealed and halted. Looping machines never rest here.
    Done,
    /// Holding the completed text before the loop continues.
    Holding,
    /// Removing one character per tick.
    Erasing,
}

/// Single-string typewriter.
///
/// The shown prefix never leaves `0..=chars` and moves by exactly one
/// character per typing or erasing tick. `passes_done` increments exactly
/// when the final character lands; observers fire completion callbacks by
/// watching it, which makes "exactly once per pass" a state invariant
/// rather than a callback discipline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypingMachine {
    pub(crate) options: TypingOptions,
    pub(crate) phase: TypingPhase,
    pub(crate) delay_ticks_left: u32,
    pub(crate) shown: usize,
    pub(crate) chars: usize,
    pub(crate) passes_done: u64,
}

impl MachineState for TypingMachine {}

impl TypingMachine {
    pub fn new(options: TypingOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let chars = options.text.chars().count();
        let delay_ticks_left = options.delay_ticks();
        let mut machine = Self {
            options,
            phase: TypingPhase::Waiting,
            delay_ticks_left,
            shown: 0,
            chars,
            passes_done: 0,
        };
        if machine.chars == 0 {
            // Nothing to type: the pass completes immediately. Looping an
            // empty text could never make progress, so the machine halts
            // either way.
            machine.phase = TypingPhase::Done;
            machine.passes_done = 1;
        } else if machine.delay_ticks_left == 0 {
            machine.phase = TypingPhase::Typing;
        }
        Ok(machine)
    }

    pub fn options(&self) -> &TypingOptions {
        &self.options
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Characters currently revealed.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Total characters in the target text.
    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Completed typing passes so far.
    pub fn passes_done(&self) -> u64 {
        self.passes_done
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypingPhase::Done
    }

    /// Currently revealed prefix of the target text.
    pub fn shown_text(&self) -> &str {
        prefix(&self.options.text, self.shown)
    }
}

/// Character-count prefix of `text`, respecting UTF-8 boundaries.
pub(crate) fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Events consumed by [`TypingMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingEvent {
    /// One timer tick at the machine's current cadence.
    Tick,
    /// Rewind to the start of a pass, e.g. to replay an entrance.
    Restart,
}

impl MachineEvent for TypingEvent {}

impl Paced for TypingMachine {
    fn step(self) -> Self {
        TypingReducer::reduce(self, TypingEvent::Tick)
    }

    fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            TypingPhase::Waiting | TypingPhase::Typing => Some(self.options.char_interval),
            TypingPhase::Holding => Some(self.options.hold_before_loop),
            TypingPhase::Erasing => Some(self.options.erase_interval()),
            TypingPhase::Done => None,
        }
    }
}
