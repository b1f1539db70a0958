use crate::geometry::vec2::Vec2d;

/// One rotating circle of an epicycle chain.
///
/// `cycle_dot` is derived state: it always lies `radius` away from `center` and is
/// recomputed on every rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center; for every circle but the first this is the previous circle's cycle dot.
    pub center: Vec2d,
    /// Point on the circumference selected by the current rotation angle.
    pub cycle_dot: Vec2d,
    /// Radius in pixels.
    pub radius: u16,
    /// Constant phase shift in degrees.
    pub angle_offset: u16,
    /// Revolutions per baseline revolution.
    pub frequency: u16,
}

impl Circle {
    /// Create a circle whose cycle dot starts at `center + (radius, 0)`.
    pub fn new(center: Vec2d, radius: u16, angle_offset: u16, frequency: u16) -> Self {
        Self {
            center,
            cycle_dot: Vec2d::new(center.x + f64::from(radius), center.y),
            radius,
            angle_offset,
            frequency,
        }
    }

    /// Effective rotation angle in degrees for a global angle.
    pub fn effective_angle_deg(&self, angle_deg: f64) -> f64 {
        (angle_deg * f64::from(self.frequency)) + f64::from(self.angle_offset)
    }

    /// Recompute `cycle_dot` for the global angle (degrees) around the current center.
    pub fn rotate(&mut self, angle_deg: f64) {
        let a = self.effective_angle_deg(angle_deg).to_radians();
        let r = f64::from(self.radius);
        self.cycle_dot = Vec2d::new(self.center.x + r * a.cos(), self.center.y + r * a.sin());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
