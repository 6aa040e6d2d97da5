//! Shared test utilities.

#![allow(dead_code)]

use std::time::Duration;

use marquee::engine::Paced;
use marquee::typing::{RotationOptions, TypingOptions};

/// Canonical typing interval used across tests.
pub const TICK: Duration = Duration::from_millis(50);

pub fn typing(text: &str) -> TypingOptions {
    TypingOptions {
        text: text.to_string(),
        char_interval: TICK,
        ..TypingOptions::default()
    }
}

pub fn looping(text: &str, erase: bool) -> TypingOptions {
    TypingOptions {
        looping: true,
        erase_before_loop: erase,
        ..typing(text)
    }
}

pub fn rotation(strings: &[&str]) -> RotationOptions {
    RotationOptions {
        strings: strings.iter().map(|s| s.to_string()).collect(),
        char_interval: TICK,
        ..RotationOptions::default()
    }
}

/// Apply `n` tick transitions.
pub fn tick_n<M: Paced>(machine: M, n: usize) -> M {
    (0..n).fold(machine, |m, _| m.step())
}
