//! Base trait for animation machine state.

/// Marker trait for machine state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a frame)
/// - Comparable (PartialEq for detecting changes)
pub trait MachineState: Clone + PartialEq + Default + Send + 'static {}
