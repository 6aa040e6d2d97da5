use thiserror::Error;

/// Errors produced when validating a progress span.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpanError {
    #[error("progress span is empty: start {start} must be below end {end}")]
    Empty { start: f32, end: f32 },
}

/// Tracked scroll bounds mapped onto normalized progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpan {
    start: f32,
    end: f32,
}

impl ProgressSpan {
    pub fn new(start: f32, end: f32) -> Result<Self, SpanError> {
        if !(end > start) {
            return Err(SpanError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Normalized progress of `offset`, clamped to `0.0..=1.0`.
    ///
    /// Offsets before the span map to 0.0, offsets past it to 1.0.
    pub fn progress(&self, offset: f32) -> f32 {
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}
