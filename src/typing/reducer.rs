use crate::machine::Reducer;
use crate::typing::state::{TypingEvent, TypingMachine, TypingPhase};

/// Pure transition function for the single-string typewriter.
pub struct TypingReducer;

impl Reducer for TypingReducer {
    type State = TypingMachine;
    type Event = TypingEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            TypingEvent::Tick => tick(state),
            TypingEvent::Restart => restart(state),
        }
    }
}

fn tick(mut state: TypingMachine) -> TypingMachine {
    match state.phase {
        TypingPhase::Waiting => {
            state.delay_ticks_left = state.delay_ticks_left.saturating_sub(1);
            if state.delay_ticks_left == 0 {
                state.phase = TypingPhase::Typing;
            }
        }
        TypingPhase::Typing => {
            state.shown = (state.shown + 1).min(state.chars);
            if state.shown == state.chars {
                state.passes_done += 1;
                state.phase = if state.options.looping {
                    TypingPhase::Holding
                } else {
                    TypingPhase::Done
                };
            }
        }
        TypingPhase::Done => {
            // Halted; the pacer stops scheduling, so this only shows up if
            // something ticks the machine by hand.
        }
        TypingPhase::Holding => {
            if state.options.erase_before_loop {
                state.phase = TypingPhase::Erasing;
            } else {
                state.shown = 0;
                state.phase = TypingPhase::Typing;
            }
        }
        TypingPhase::Erasing => {
            state.shown = state.shown.saturating_sub(1);
            if state.shown == 0 {
                state.phase = TypingPhase::Typing;
            }
        }
    }
    state
}

fn restart(mut state: TypingMachine) -> TypingMachine {
    state.shown = 0;
    state.delay_ticks_left = state.options.delay_ticks();
    state.phase = if state.chars == 0 {
        TypingPhase::Done
    } else if state.delay_ticks_left == 0 {
        TypingPhase::Typing
    } else {
        TypingPhase::Waiting
    };
    state
}
