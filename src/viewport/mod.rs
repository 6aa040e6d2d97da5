//! Viewport visibility gating.
//!
//! A gate consumes intersection ratios from whatever geometry the caller
//! tracks and reports entry/exit edges plus a permanent trigger latch for
//! fire-once consumers. Content that never scrolls into view never
//! reports visible, so anything gated behind it is never started.

mod gate;

pub use gate::{intersection_ratio, GateChange, GateError, GateMode, GateOptions, VisibilityGate};
