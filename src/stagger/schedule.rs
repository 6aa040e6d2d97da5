use std::time::Duration;

use crate::stagger::easing::Easing;

/// Unit an input text is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Character,
    Word,
}

/// Shared enter transition applied to every item independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
            easing: Easing::EaseOutCubic,
        }
    }
}

/// Per-item reveal delays over a split text.
///
/// Item `i` starts its transition `i × interval` after the parent reveal.
/// A zero interval is valid and reveals everything at once.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggerSchedule {
    items: Vec<String>,
    interval: Duration,
    transition: Transition,
}

impl StaggerSchedule {
    pub fn new(
        text: &str,
        granularity: Granularity,
        interval: Duration,
        transition: Transition,
    ) -> Self {
        let items = match granularity {
            Granularity::Character => text.chars().map(String::from).collect(),
            Granularity::Word => text.split_whitespace().map(String::from).collect(),
        };
        Self {
            items,
            interval,
            transition,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Delay before item `index` starts its transition.
    pub fn delay(&self, index: usize) -> Duration {
        let index = index.min(u32::MAX as usize) as u32;
        self.interval.saturating_mul(index)
    }

    /// Eased progress of item `index` at `elapsed` since the parent
    /// reveal, in `0.0..=1.0`.
    pub fn progress_at(&self, index: usize, elapsed: Duration) -> f32 {
        let delay = self.delay(index);
        if elapsed < delay {
            return 0.0;
        }
        if self.transition.duration.is_zero() {
            return 1.0;
        }
        let into = (elapsed - delay).as_secs_f32() / self.transition.duration.as_secs_f32();
        self.transition.easing.apply(into)
    }

    /// Number of items whose transition has begun at `elapsed`.
    pub fn begun_at(&self, elapsed: Duration) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        if self.interval.is_zero() {
            return self.items.len();
        }
        let begun = elapsed.as_nanos() / self.interval.as_nanos();
        let begun = begun.min(self.items.len() as u128 - 1) as usize;
        begun + 1
    }
}
