//! Base trait for events consumed by animation machines.

/// Marker trait for machine events.
///
/// Events represent:
/// - Timer ticks
/// - External signals (visibility changes, motion preference changes)
/// - Control actions (restart)
///
/// Events are processed by reducers to produce new states.
pub trait MachineEvent: Send + 'static {}
