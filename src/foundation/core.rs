use crate::foundation::error::{EpicycleError, EpicycleResult};

/// 0-based animation tick index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> EpicycleResult<Self> {
        if start.0 > end.0 {
            return Err(EpicycleError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Animation tick rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (ticks).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Create a validated tick rate.
    pub fn new(num: u32, den: u32) -> EpicycleResult<Self> {
        if den == 0 {
            return Err(EpicycleError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(EpicycleError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert a tick count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        ((frames as f64) * f64::from(self.den)) / f64::from(self.num)
    }

    /// Convert seconds to a tick count, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        ((secs * f64::from(self.num)) / f64::from(self.den))
            .floor()
            .max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> EpicycleResult<Self> {
        if width == 0 || height == 0 {
            return Err(EpicycleError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Bytes per row of a 4-byte-per-pixel buffer.
    pub fn stride(self) -> usize {
        (self.width as usize).saturating_mul(4)
    }

    /// Total bytes of a 4-byte-per-pixel buffer.
    pub fn byte_len(self) -> usize {
        self.stride().saturating_mul(self.height as usize)
    }

    /// Return `true` when `(x, y)` addresses a pixel of this canvas.
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
