//! Cascading reveal schedules.
//!
//! A stagger assigns each item of a sequence a delay proportional to its
//! index, so items enter one after another once a parent reveal fires.
//! Schedules are pure: what a renderer shows is a function of elapsed
//! time since the reveal, nothing else.

mod easing;
mod schedule;

pub use easing::Easing;
pub use schedule::{Granularity, StaggerSchedule, Transition};
