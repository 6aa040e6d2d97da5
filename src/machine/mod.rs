//! State-machine primitives for animation sequencing.
//!
//! Every sequencer in this crate is expressed as unidirectional
//! data flow:
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ Frame
//!    ↑                             │
//!    └────────── timers ───────────┘
//! ```
//!
//! - **State**: complete, comparable snapshot of one machine
//! - **Event**: timer ticks or external signals
//! - **Reducer**: pure function that transforms state based on events
//!
//! Reducers never touch the clock. Scheduling lives in [`crate::engine`],
//! which turns elapsed time into discrete events, so every transition can
//! be tested as a plain function call.

mod event;
mod reducer;
mod state;

pub use event::MachineEvent;
pub use reducer::Reducer;
pub use state::MachineState;
