//! Showcase configuration.
//!
//! A TOML file controls text content, timing, gating, and scene layout.
//! Everything that could construct an invalid machine is rejected at
//! load time, never at tick time.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    MarqueeConfig, MotionConfig, PanelConfig, RotationConfig, ScenesConfig, StaggerConfig,
    TypingConfig,
};
