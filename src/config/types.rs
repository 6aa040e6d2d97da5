use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scroll::{Follower, SceneError, SceneSet};
use crate::stagger::{Granularity, StaggerSchedule, Transition};
use crate::typing::{RotationOptions, TypingOptions};
use crate::viewport::{GateMode, GateOptions};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Milliseconds between UI ticks.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub stagger: StaggerConfig,
    #[serde(default)]
    pub scenes: ScenesConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            motion: MotionConfig::default(),
            typing: TypingConfig::default(),
            rotation: RotationConfig::default(),
            stagger: StaggerConfig::default(),
            scenes: ScenesConfig::default(),
        }
    }
}

impl MarqueeConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Motion preference handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Force the preference, overriding the environment signal.
    #[serde(default)]
    pub reduce: Option<bool>,
    /// Milliseconds between polls of the environment signal.
    #[serde(default = "default_motion_poll_ms")]
    pub poll_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduce: None,
            poll_ms: default_motion_poll_ms(),
        }
    }
}

/// The lead panel's typewriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    /// Text typed once the lead panel scrolls into view.
    #[serde(default = "default_typing_text")]
    pub text: String,
    /// Milliseconds per typed character.
    #[serde(default = "default_char_ms")]
    pub char_ms: u64,
    /// Milliseconds before the first character appears.
    #[serde(default)]
    pub start_delay_ms: u64,
    #[serde(default)]
    pub looping: bool,
    /// Milliseconds the completed text is held before looping.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    #[serde(default = "default_true")]
    pub erase_before_loop: bool,
    /// Erasing runs at `char_ms / erase_divisor`.
    #[serde(default = "default_erase_divisor")]
    pub erase_divisor: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: default_typing_text(),
            char_ms: default_char_ms(),
            start_delay_ms: 0,
            looping: false,
            hold_ms: default_hold_ms(),
            erase_before_loop: default_true(),
            erase_divisor: default_erase_divisor(),
        }
    }
}

impl TypingConfig {
    pub fn options(&self) -> TypingOptions {
        TypingOptions {
            text: self.text.clone(),
            char_interval: Duration::from_millis(self.char_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
            looping: self.looping,
            hold_before_loop: Duration::from_millis(self.hold_ms),
            erase_before_loop: self.erase_before_loop,
            erase_divisor: self.erase_divisor,
        }
    }
}

/// The header's rotating role line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default = "default_rotation_strings")]
    pub strings: Vec<String>,
    /// Milliseconds per typed character.
    #[serde(default = "default_char_ms")]
    pub char_ms: u64,
    /// Milliseconds each completed string is held before erasing.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// Erasing runs at `char_ms / erase_divisor`.
    #[serde(default = "default_erase_divisor")]
    pub erase_divisor: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            strings: default_rotation_strings(),
            char_ms: default_char_ms(),
            hold_ms: default_hold_ms(),
            erase_divisor: default_erase_divisor(),
        }
    }
}

impl RotationConfig {
    pub fn options(&self) -> RotationOptions {
        RotationOptions {
            strings: self.strings.clone(),
            char_interval: Duration::from_millis(self.char_ms),
            start_delay: Duration::ZERO,
            hold: Duration::from_millis(self.hold_ms),
            erase_divisor: self.erase_divisor,
        }
    }
}

/// Staggered reveals: the headline and panel bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaggerConfig {
    #[serde(default = "default_headline")]
    pub headline: String,
    /// Milliseconds between character reveals in the headline.
    #[serde(default = "default_char_stagger_ms")]
    pub char_interval_ms: u64,
    /// Milliseconds between word reveals in panel bodies.
    #[serde(default = "default_word_stagger_ms")]
    pub word_interval_ms: u64,
    /// Milliseconds each item's enter transition lasts.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            headline: default_headline(),
            char_interval_ms: default_char_stagger_ms(),
            word_interval_ms: default_word_stagger_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl StaggerConfig {
    fn transition(&self) -> Transition {
        Transition {
            duration: Duration::from_millis(self.transition_ms),
            ..Transition::default()
        }
    }

    pub fn headline_schedule(&self) -> StaggerSchedule {
        StaggerSchedule::new(
            &self.headline,
            Granularity::Character,
            Duration::from_millis(self.char_interval_ms),
            self.transition(),
        )
    }

    pub fn body_schedule(&self, text: &str) -> StaggerSchedule {
        StaggerSchedule::new(
            text,
            Granularity::Word,
            Duration::from_millis(self.word_interval_ms),
            self.transition(),
        )
    }
}

/// Scrollable story panels and their gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenesConfig {
    /// Fraction of a panel that must be on screen to open its gate.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// When true a panel's reveal survives scrolling away; when false it
    /// replays on every re-entry.
    #[serde(default = "default_true")]
    pub fire_once: bool,
    /// Time constant of the smoothed progress follower, in milliseconds.
    #[serde(default = "default_smoothing_ms")]
    pub smoothing_ms: u64,
    #[serde(default = "default_panels")]
    pub panels: Vec<PanelConfig>,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fire_once: default_true(),
            smoothing_ms: default_smoothing_ms(),
            panels: default_panels(),
        }
    }
}

impl ScenesConfig {
    pub fn gate_options(&self) -> GateOptions {
        GateOptions {
            threshold: self.threshold,
            mode: if self.fire_once {
                GateMode::Once
            } else {
                GateMode::Continuous
            },
        }
    }

    pub fn scene_set(&self) -> Result<SceneSet, SceneError> {
        let weights: Vec<f32> = self.panels.iter().map(|panel| panel.weight).collect();
        SceneSet::from_weights(&weights)
    }

    pub fn follower(&self) -> Follower {
        Follower::new(Duration::from_millis(self.smoothing_ms))
    }
}

/// One panel of the story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub title: String,
    pub body: String,
    /// Relative share of scroll progress this panel's scene owns.
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_tick_ms() -> u64 {
    33
}

fn default_motion_poll_ms() -> u64 {
    400
}

fn default_typing_text() -> String {
    "Hi — I build small, sharp tools for the terminal.".to_string()
}

fn default_char_ms() -> u64 {
    50
}

fn default_hold_ms() -> u64 {
    1500
}

fn default_erase_divisor() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_headline() -> String {
    "KINETIC TYPE".to_string()
}

fn default_char_stagger_ms() -> u64 {
    40
}

fn default_word_stagger_ms() -> u64 {
    120
}

fn default_transition_ms() -> u64 {
    400
}

fn default_threshold() -> f32 {
    0.25
}

fn default_smoothing_ms() -> u64 {
    250
}

fn default_weight() -> f32 {
    1.0
}

fn default_rotation_strings() -> Vec<String> {
    vec![
        "Rust engineer".to_string(),
        "terminal tinkerer".to_string(),
        "animation nerd".to_string(),
    ]
}

fn default_panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig {
            title: "About".to_string(),
            body: "I design small, sharp tools and write about the process.".to_string(),
            weight: 1.0,
        },
        PanelConfig {
            title: "Projects".to_string(),
            body: "A terminal typewriter, a scroll-driven story engine, and a handful of parsers."
                .to_string(),
            weight: 1.0,
        },
        PanelConfig {
            title: "Skills".to_string(),
            body: "Rust, text interfaces, animation timing, careful tests.".to_string(),
            weight: 1.0,
        },
        PanelConfig {
            title: "Contact".to_string(),
            body: "Say hello at hello@example.dev — the inbox is read by a human.".to_string(),
            weight: 1.0,
        },
    ]
}
