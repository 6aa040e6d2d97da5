//! Character-by-character typing sequencers.
//!
//! [`TypingMachine`] reveals one string, optionally looping with a
//! hold-and-erase cycle; erasing runs at a fraction of the typing interval
//! (half, by default). [`RotationMachine`] cycles through an ordered list
//! of strings forever, erasing before each advance. [`CursorBlink`] is an
//! independent fixed-period toggle, deliberately decoupled from both.
//!
//! All three are pure machines; pair them with [`crate::engine::Pacer`]
//! to run against real time.

mod cursor;
mod options;
mod reducer;
mod rotation;
mod state;

pub use cursor::{CursorBlink, CursorEvent, CursorReducer, DEFAULT_BLINK_PERIOD};
pub use options::{OptionsError, RotationOptions, TypingOptions};
pub use reducer::TypingReducer;
pub use rotation::{RotationEvent, RotationMachine, RotationReducer};
pub use state::{TypingEvent, TypingMachine, TypingPhase};
