use std::time::Duration;

use thiserror::Error;

/// Errors produced when validating sequencer options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("character interval must be greater than zero")]
    ZeroCharInterval,

    #[error("erase divisor must be greater than zero")]
    ZeroEraseDivisor,

    #[error("rotation requires at least one string")]
    NoRotationStrings,
}

/// Configuration for a single-string typing sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingOptions {
    /// Text revealed one character per tick.
    pub text: String,
    /// Interval between typed characters. Must be greater than zero; a
    /// zero interval would turn the tick chain into a busy loop.
    pub char_interval: Duration,
    /// Delay before the first character appears.
    pub start_delay: Duration,
    /// Whether to loop after the text is fully revealed.
    pub looping: bool,
    /// How long a looping machine holds the completed text.
    pub hold_before_loop: Duration,
    /// Erase character by character before retyping; when false the text
    /// clears in a single transition.
    pub erase_before_loop: bool,
    /// Erasing runs at `char_interval / erase_divisor`.
    pub erase_divisor: u32,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            char_interval: Duration::from_millis(50),
            start_delay: Duration::ZERO,
            looping: false,
            hold_before_loop: Duration::from_millis(1500),
            erase_before_loop: true,
            erase_divisor: 2,
        }
    }
}

impl TypingOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.char_interval.is_zero() {
            return Err(OptionsError::ZeroCharInterval);
        }
        if self.erase_divisor == 0 {
            return Err(OptionsError::ZeroEraseDivisor);
        }
        Ok(())
    }

    /// Interval between erased characters.
    pub fn erase_interval(&self) -> Duration {
        self.char_interval / self.erase_divisor.max(1)
    }

    /// Whole ticks consumed before typing starts.
    pub(crate) fn delay_ticks(&self) -> u32 {
        ticks_for(self.start_delay, self.char_interval)
    }
}

/// Configuration for a rotating multi-string sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationOptions {
    /// Strings typed in order, wrapping forever.
    pub strings: Vec<String>,
    /// Interval between typed characters.
    pub char_interval: Duration,
    /// Delay before the very first character appears.
    pub start_delay: Duration,
    /// How long each completed string is held before erasing.
    pub hold: Duration,
    /// Erasing runs at `char_interval / erase_divisor`.
    pub erase_divisor: u32,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            char_interval: Duration::from_millis(50),
            start_delay: Duration::ZERO,
            hold: Duration::from_millis(1500),
            erase_divisor: 2,
        }
    }
}

impl RotationOptions {
    pub fn new(strings: Vec<String>) -> Self {
        Self {
            strings,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.strings.is_empty() {
            return Err(OptionsError::NoRotationStrings);
        }
        if self.char_interval.is_zero() {
            return Err(OptionsError::ZeroCharInterval);
        }
        if self.erase_divisor == 0 {
            return Err(OptionsError::ZeroEraseDivisor);
        }
        Ok(())
    }

    /// Interval between erased characters.
    pub fn erase_interval(&self) -> Duration {
        self.char_interval / self.erase_divisor.max(1)
    }

    pub(crate) fn delay_ticks(&self) -> u32 {
        ticks_for(self.start_delay, self.char_interval)
    }
}

fn ticks_for(delay: Duration, interval: Duration) -> u32 {
    if delay.is_zero() {
        return 0;
    }
    let interval = interval.as_nanos().max(1);
    delay.as_nanos().div_ceil(interval).min(u32::MAX as u128) as u32
}
