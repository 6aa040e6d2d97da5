use thiserror::Error;

/// Errors produced when building a scene set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("a scene set needs at least one scene")]
    NoScenes,

    #[error("scene cut {0} is outside the open interval (0, 1)")]
    CutOutOfRange(f32),

    #[error("scene cuts must be strictly increasing")]
    UnorderedCuts,

    #[error("scene weights must be positive and finite")]
    BadWeight,
}

/// Sub-range of normalized progress owned by one scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRange {
    pub start: f32,
    pub end: f32,
}

/// Ordered, contiguous scene ranges covering `0.0..=1.0`.
///
/// Resolution is inclusive on the lower bound; the final range also owns
/// `1.0` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSet {
    ranges: Vec<SceneRange>,
}

impl SceneSet {
    /// Equal-width scenes.
    pub fn equal(count: usize) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::NoScenes);
        }
        let width = 1.0 / count as f32;
        let ranges = (0..count)
            .map(|i| SceneRange {
                start: i as f32 * width,
                end: if i + 1 == count {
                    1.0
                } else {
                    (i + 1) as f32 * width
                },
            })
            .collect();
        Ok(Self { ranges })
    }

    /// Scenes divided at explicit interior cut points.
    pub fn from_cuts(cuts: &[f32]) -> Result<Self, SceneError> {
        for &cut in cuts {
            if !(cut > 0.0 && cut < 1.0) {
                return Err(SceneError::CutOutOfRange(cut));
            }
        }
        if cuts.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SceneError::UnorderedCuts);
        }
        let mut ranges = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0.0;
        for &cut in cuts {
            ranges.push(SceneRange { start, end: cut });
            start = cut;
        }
        ranges.push(SceneRange { start, end: 1.0 });
        Ok(Self { ranges })
    }

    /// Scenes sized proportionally to `weights`.
    pub fn from_weights(weights: &[f32]) -> Result<Self, SceneError> {
        if weights.is_empty() {
            return Err(SceneError::NoScenes);
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(SceneError::BadWeight);
        }
        let total: f32 = weights.iter().sum();
        let mut ranges = Vec::with_capacity(weights.len());
        let mut start = 0.0;
        let mut acc = 0.0;
        for (i, weight) in weights.iter().enumerate() {
            acc += weight;
            // Force the last bound onto 1.0 so float accumulation can
            // never leave a sliver uncovered.
            let end = if i + 1 == weights.len() {
                1.0
            } else {
                acc / total
            };
            ranges.push(SceneRange { start, end });
            start = end;
        }
        Ok(Self { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[SceneRange] {
        &self.ranges
    }

    /// Index of the scene owning `progress`. Lower bounds are inclusive;
    /// `1.0` belongs to the last scene.
    pub fn active(&self, progress: f32) -> usize {
        let p = progress.clamp(0.0, 1.0);
        self.ranges
            .iter()
            .position(|range| p < range.end)
            .unwrap_or(self.ranges.len() - 1)
    }

    /// Progress within the active scene, `0.0..=1.0`.
    pub fn local_progress(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let range = self.ranges[self.active(p)];
        if range.end > range.start {
            ((p - range.start) / (range.end - range.start)).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
