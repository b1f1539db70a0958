//! Epicycle composition.
//!
//! Every circle is re-centered on the previous circle's cycle dot and rotated, so the last
//! cycle dot (the sum dot) traces the sum of all individual rotations.

use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::geometry::circle::Circle;
use crate::geometry::vec2::Vec2d;

/// Advance the whole chain to `angle_deg`.
///
/// The first circle keeps its center; each following circle is moved onto the freshly
/// computed cycle dot of its predecessor before rotating. Fails on an empty chain.
pub fn transform_chain(circles: &mut [Circle], angle_deg: f64) -> EpicycleResult<()> {
    let Some(first) = circles.first() else {
        return Err(EpicycleError::validation("cannot transform an empty circle chain"));
    };

    let mut prev_dot = first.center;
    for circle in circles.iter_mut() {
        circle.center = prev_dot;
        circle.rotate(angle_deg);
        prev_dot = circle.cycle_dot;
    }
    Ok(())
}

/// Cycle dot of the last circle, `None` for an empty chain.
pub fn sum_dot(circles: &[Circle]) -> Option<Vec2d> {
    circles.last().map(|c| c.cycle_dot)
}

/// Sum dot of a copy of the chain advanced to angle 1.
///
/// Used as the starting point of the background trail before the first tick.
pub fn trace_start(circles: &[Circle]) -> EpicycleResult<Vec2d> {
    let mut scratch = circles.to_vec();
    transform_chain(&mut scratch, 1.0)?;
    sum_dot(&scratch).ok_or_else(|| EpicycleError::validation("empty circle chain"))
}

#[cfg(test)]
#[path = "../../tests/unit/chain/transform.rs"]
mod tests;
