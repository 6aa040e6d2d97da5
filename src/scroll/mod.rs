//! Scroll progress mapping.
//!
//! Raw progress is an exact clamped mapping of a scroll offset onto
//! `0.0..=1.0`. The follower trails it for consumers that want eased
//! motion; scene sets resolve which discrete panel owns the current
//! progress for consumers that need the exact value.

mod progress;
mod scenes;
mod smooth;

pub use progress::{ProgressSpan, SpanError};
pub use scenes::{SceneError, SceneRange, SceneSet};
pub use smooth::Follower;
