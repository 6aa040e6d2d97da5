use std::ops::Range;

use thiserror::Error;

/// Errors produced when validating gate options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GateError {
    #[error("intersection threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f32),
}

/// How a gate reacts to repeated entries and exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateMode {
    /// The first entry latches permanently; later exits are ignored.
    #[default]
    Once,
    /// Visibility tracks every entry and exit.
    Continuous,
}

/// Configuration for a [`VisibilityGate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateOptions {
    /// Fraction of the element that must be visible to count as in view.
    /// A threshold of zero means "any overlap at all".
    pub threshold: f32,
    pub mode: GateMode,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            mode: GateMode::Once,
        }
    }
}

impl GateOptions {
    pub fn validate(&self) -> Result<(), GateError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(GateError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

/// Edge reported by one intersection observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    Entered,
    Exited,
    None,
}

/// Threshold-based visibility state for one tracked element.
///
/// The gate never sees geometry, only ratios; feed it from
/// [`intersection_ratio`] or any other source. A fresh gate reports
/// not-visible until told otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    options: GateOptions,
    visible: bool,
    triggered: bool,
}

impl VisibilityGate {
    pub fn new(options: GateOptions) -> Result<Self, GateError> {
        options.validate()?;
        Ok(Self {
            options,
            visible: false,
            triggered: false,
        })
    }

    pub fn options(&self) -> GateOptions {
        self.options
    }

    /// Ingest one intersection ratio and report the resulting edge.
    pub fn observe(&mut self, ratio: f32) -> GateChange {
        let ratio = ratio.clamp(0.0, 1.0);
        let above = if self.options.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.options.threshold
        };
        match (self.visible, above) {
            (false, true) => {
                self.visible = true;
                self.triggered = true;
                GateChange::Entered
            }
            (true, false) => {
                self.visible = false;
                GateChange::Exited
            }
            _ => GateChange::None,
        }
    }

    /// Current raw intersection state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the gate has ever opened. Never resets.
    pub fn has_triggered(&self) -> bool {
        self.triggered
    }

    /// Whether gated content should be shown under the gate's mode.
    pub fn is_active(&self) -> bool {
        match self.options.mode {
            GateMode::Once => self.triggered,
            GateMode::Continuous => self.visible,
        }
    }
}

/// Visible fraction of a one-dimensional span within a window.
///
/// Returns 0.0 for disjoint or degenerate spans and 1.0 when the span is
/// fully contained.
pub fn intersection_ratio(span: Range<i64>, window: Range<i64>) -> f32 {
    let len = span.end - span.start;
    if len <= 0 {
        return 0.0;
    }
    let overlap = span.end.min(window.end) - span.start.max(window.start);
    if overlap <= 0 {
        return 0.0;
    }
    (overlap as f32 / len as f32).clamp(0.0, 1.0)
}
