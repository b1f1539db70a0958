use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::geometry::circle::Circle;
use crate::geometry::vec2::Vec2d;

/// Static parameters of one circle in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CircleDef {
    /// Radius in pixels.
    pub radius: u16,
    /// Phase shift in degrees.
    #[serde(default)]
    pub angle_offset: u16,
    /// Revolutions per baseline revolution.
    pub frequency: u16,
}

/// Everything needed to start an epicycle session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Drawing surface and background size.
    pub canvas: Canvas,
    /// Ticks per second; one tick advances the global angle by one degree.
    #[serde(default)]
    pub fps: Fps,
    /// Fixed center of the first circle, in pixels.
    pub center: [f64; 2],
    /// Chain from the anchored circle outwards.
    pub circles: Vec<CircleDef>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let circles = [
            (120, 0, 1),
            (100, 45, 2),
            (80, 20, 4),
            (60, 0, 6),
            (40, 90, 8),
            (20, 0, 10),
        ]
        .into_iter()
        .map(|(radius, angle_offset, frequency)| CircleDef {
            radius,
            angle_offset,
            frequency,
        })
        .collect();

        Self {
            canvas: Canvas {
                width: 1600,
                height: 900,
            },
            fps: Fps::default(),
            center: [800.0, 450.0],
            circles,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(s: &str) -> EpicycleResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| EpicycleError::serde(format!("parse scene JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a scene JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EpicycleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            EpicycleError::serde(format!("parse scene JSON '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the scene can be drawn.
    pub fn validate(&self) -> EpicycleResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(EpicycleError::validation("canvas width/height must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(EpicycleError::validation("fps must have num>0 and den>0"));
        }
        if self.circles.is_empty() {
            return Err(EpicycleError::validation(
                "scene must contain at least one circle",
            ));
        }
        let [x, y] = self.center;
        let inside = x.is_finite()
            && y.is_finite()
            && x >= 0.0
            && y >= 0.0
            && x < f64::from(self.canvas.width)
            && y < f64::from(self.canvas.height);
        if !inside {
            return Err(EpicycleError::validation(format!(
                "center ({x}, {y}) lies outside the {}x{} canvas",
                self.canvas.width, self.canvas.height
            )));
        }
        Ok(())
    }

    /// Instantiate the chain, every circle starting at the anchor center.
    pub fn build_circles(&self) -> Vec<Circle> {
        let center = Vec2d::new(self.center[0], self.center[1]);
        self.circles
            .iter()
            .map(|d| Circle::new(center, d.radius, d.angle_offset, d.frequency))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
