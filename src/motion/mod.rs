//! Reduced-motion preference signal.
//!
//! Animated components consult this before animating. The preference is
//! modeled as an injectable capability rather than ambient global state,
//! so tests substitute a fixed source and the showcase reads the
//! environment. Absence of the underlying signal always reads as
//! "motion allowed".

mod source;
mod watcher;

pub use source::{EnvMotion, MotionSource, StaticMotion, REDUCE_MOTION_ENV};
pub use watcher::MotionWatcher;
