use crate::foundation::error::{SeqError, SeqResult};

/// Absolute 0-based frame index in animation timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> SeqResult<Self> {
        if start.0 > end.0 {
            return Err(SeqError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// The single-frame range `[f, f + 1)`.
    pub fn single(f: FrameIndex) -> Self {
        Self {
            start: f,
            end: FrameIndex(f.0 + 1),
        }
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Frames-per-second, recorded verbatim in the descriptor.
///
/// Any positive finite rate is accepted (`29.97` included). The rate never changes how many
/// frames a sequence has; each image always spans one frame unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fps(f64);

impl Fps {
    /// Create a validated FPS value.
    pub fn new(fps: f64) -> SeqResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(SeqError::invalid_input(format!(
                "fps must be a positive finite number, got {fps}"
            )));
        }
        Ok(Self(fps))
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> SeqResult<Self> {
        if width == 0 || height == 0 {
            return Err(SeqError::invalid_input(format!(
                "canvas width/height must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Canvas center `(width / 2, height / 2)`; odd sides land on a half pixel.
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
