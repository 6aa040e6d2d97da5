//! marquee: kinetic text animation machines for terminal UIs.
//!
//! The library is a set of pure, timer-free sequencers:
//!
//! - [`typing`]: character-by-character typewriters, including a rotating
//!   multi-string variant and an independent cursor blink
//! - [`stagger`]: cascading per-item reveal schedules with easing
//! - [`viewport`]: visibility gating at an intersection threshold
//! - [`scroll`]: normalized scroll progress, smoothing, and scene sets
//! - [`motion`]: the reduced-motion preference signal
//!
//! Machines advance exclusively through [`machine::Reducer`] transitions;
//! [`engine`] turns wall time into those transitions, and nothing else
//! touches a clock. The [`ui`] module is a ratatui showcase wiring
//! everything together into a scrollable story.

pub mod config;
pub mod engine;
pub mod machine;
pub mod motion;
pub mod scroll;
pub mod shutdown;
pub mod stagger;
pub mod typing;
pub mod ui;
pub mod viewport;
