//! Integer rasterization of epicycle scenes.
//!
//! All primitives reduce to single pixel writes through a [`Surface`] (live frame) or into
//! the caller-owned background buffer (persistent trail). Nothing here allocates.

use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::geometry::circle::Circle;
use crate::geometry::color::Color;
use crate::geometry::vec2::Pixel;
use crate::render::background::{BYTES_PER_PIXEL, FOURTH_CHANNEL, pixel_offset};
use crate::render::surface::Surface;

/// Half length of the reference axes drawn through the first circle's center.
pub const GRID_HALF_LENGTH: i32 = 300;

/// Radius of the cycle-dot and sum-dot markers.
pub const MARKER_RADIUS: u16 = 4;

const COS_45: f32 = 0.707_106_77;

// Added to r² so the brute-force disk matches a midpoint circle more closely.
const DOT_SLACK: f32 = 0.8;

const SOLID_NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Drawing engine bound to one display surface.
///
/// Draw state (current color, solid drawing, background dimensions) lives on the value, so
/// independent rasterizers never interfere.
#[derive(Debug)]
pub struct Rasterizer<S: Surface> {
    surface: S,
    color: Color,
    solid_drawing: bool,
    bg_width: u32,
    bg_height: u32,
}

impl<S: Surface> Rasterizer<S> {
    /// Bind a rasterizer to `surface`. Background dimensions start at 0x0.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            color: Color::BLACK,
            solid_drawing: false,
            bg_width: 0,
            bg_height: 0,
        }
    }

    /// Borrow the bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the bound surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unbind and return the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Record the background dimensions used for row stride. Call after every resize.
    pub fn update_background(&mut self, width: u32, height: u32) {
        self.bg_width = width;
        self.bg_height = height;
    }

    /// Background dimensions recorded by the last [`Rasterizer::update_background`].
    pub fn background_size(&self) -> (u32, u32) {
        (self.bg_width, self.bg_height)
    }

    /// Current draw color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the color for all following pixel writes.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.surface.set_draw_color(color);
    }

    /// Whether single pixels are expanded to 3x3 blocks.
    pub fn solid_drawing(&self) -> bool {
        self.solid_drawing
    }

    /// Toggle 3x3 pixel expansion.
    pub fn set_solid_drawing(&mut self, solid: bool) {
        self.solid_drawing = solid;
    }

    /// Plot a pixel (and its 8 neighbors in solid mode) in the current color.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.surface.draw_point(x, y);
        if self.solid_drawing {
            for (dx, dy) in SOLID_NEIGHBORS {
                self.surface.draw_point(x.saturating_add(dx), y.saturating_add(dy));
            }
        }
    }

    /// [`Rasterizer::set_pixel`] for a [`Pixel`].
    pub fn set_pixel_at(&mut self, p: Pixel) {
        self.set_pixel(p.x, p.y);
    }

    /// Write one trail pixel as `[b, g, r, 0]` at `width*4*y + x*4`.
    ///
    /// Coordinates outside the recorded background dimensions are skipped.
    pub fn set_background_pixel(&self, background: &mut [u8], x: i32, y: i32, color: Color) {
        let (Ok(xu), Ok(yu)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if xu >= self.bg_width || yu >= self.bg_height {
            return;
        }
        let offset = pixel_offset(self.bg_width as usize, xu as usize, yu as usize);
        let Some(px) = background.get_mut(offset..offset + BYTES_PER_PIXEL) else {
            return;
        };
        let [r, g, b, _] = color.to_rgba8();
        px.copy_from_slice(&[b, g, r, FOURTH_CHANNEL]);
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, from: Pixel, to: Pixel) {
        for p in BresenhamLine::new(from, to) {
            self.set_pixel(p.x, p.y);
        }
    }

    /// Bresenham line written into the persistent background instead of the surface.
    pub fn draw_line_to_background(
        &self,
        background: &mut [u8],
        from: Pixel,
        to: Pixel,
        color: Color,
    ) {
        for p in BresenhamLine::new(from, to) {
            self.set_background_pixel(background, p.x, p.y, color);
        }
    }

    /// Slope-intercept line (`y = m·x + b`) iterating the longer axis in floating point.
    ///
    /// Slower than [`Rasterizer::draw_line`] and kept as its reference.
    pub fn draw_line_naive(&mut self, from: Pixel, to: Pixel) {
        let (mut x0, mut y0) = (from.x as f32, from.y as f32);
        let (mut x1, mut y1) = (to.x as f32, to.y as f32);
        let dx = x1 - x0;
        let dy = y1 - y0;

        if dx == 0.0 && dy == 0.0 {
            self.set_pixel_at(from);
            return;
        }

        if dx.abs() > dy.abs() {
            if dx < 0.0 {
                std::mem::swap(&mut x0, &mut x1);
                std::mem::swap(&mut y0, &mut y1);
            }
            let m = dy / dx;
            let b = y0 - (m * x0);
            for x in (x0 as i32)..=(x1 as i32) {
                let y = ((m * x as f32) + b + 0.5) as i32;
                self.set_pixel(x, y);
            }
        } else {
            if dy < 0.0 {
                std::mem::swap(&mut y0, &mut y1);
                std::mem::swap(&mut x0, &mut x1);
            }
            let m = dx / dy;
            let b = x0 - (m * y0);
            for y in (y0 as i32)..=(y1 as i32) {
                let x = ((m * y as f32) + b + 0.5) as i32;
                self.set_pixel(x, y);
            }
        }
    }

    /// Circle outline from one octant mirrored eight ways.
    pub fn draw_circle_outline(&mut self, radius: u16, center: Pixel) {
        let (cx, cy) = (center.x, center.y);
        let rs = i64::from(radius) * i64::from(radius);
        let x_range = ((f32::from(radius) * COS_45) + 0.5) as i32;
        for x in 0..=x_range {
            let y = ((((rs - i64::from(x) * i64::from(x)).max(0)) as f64).sqrt() + 0.5) as i32;
            let (xp, xm) = (cx.saturating_add(x), cx.saturating_sub(x));
            let (yp, ym) = (cy.saturating_add(y), cy.saturating_sub(y));
            let (xyp, xym) = (cx.saturating_add(y), cx.saturating_sub(y));
            let (yxp, yxm) = (cy.saturating_add(x), cy.saturating_sub(x));
            self.set_pixel(xp, yp);
            self.set_pixel(xm, yp);
            self.set_pixel(xp, ym);
            self.set_pixel(xm, ym);
            self.set_pixel(xyp, yxp);
            self.set_pixel(xym, yxp);
            self.set_pixel(xyp, yxm);
            self.set_pixel(xym, yxm);
        }
    }

    /// Filled disk by scanning the bounding square.
    pub fn draw_filled_dot(&mut self, radius: u16, center: Pixel) {
        let r = i32::from(radius);
        let limit = (i64::from(r) * i64::from(r)) as f32 + (f32::from(radius) * DOT_SLACK);
        for y in -r..=r {
            for x in -r..=r {
                let d2 = i64::from(x) * i64::from(x) + i64::from(y) * i64::from(y);
                if (d2 as f32) <= limit {
                    self.set_pixel(center.x.saturating_add(x), center.y.saturating_add(y));
                }
            }
        }
    }

    /// Plot `wave_count * 360 * frequency` degrees of `height_scaling · sin(angle / frequency)`.
    ///
    /// The horizontal step shrinks on the steep parts of the curve (`|y| <= 0.5`) so the
    /// plot stays connected. `y` is scaled by 100 and everything is translated by
    /// `start + offset`.
    pub fn draw_sine_wave(
        &mut self,
        start: Pixel,
        offset: Pixel,
        height_scaling: f32,
        frequency: f32,
        wave_count: f32,
    ) -> EpicycleResult<()> {
        if !(height_scaling.is_finite() && height_scaling > 0.0) {
            return Err(EpicycleError::validation(format!(
                "sine wave height scaling must be positive, got {height_scaling}"
            )));
        }
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(EpicycleError::validation(format!(
                "sine wave frequency must be positive, got {frequency}"
            )));
        }
        if !(wave_count.is_finite() && wave_count >= 0.0) {
            return Err(EpicycleError::validation(format!(
                "sine wave count must be non-negative, got {wave_count}"
            )));
        }

        let waves = ((wave_count * 360.0) * frequency) as i32 as f32;
        let min_step = 0.5 / height_scaling;
        if waves + min_step <= waves {
            return Err(EpicycleError::validation(
                "sine wave step is too small to advance",
            ));
        }

        let (sx, sy) = (start.x as f32, start.y as f32);
        let (ox, oy) = (offset.x as f32, offset.y as f32);
        let mut x = 0.0_f32;
        while x <= waves {
            let angle_rad = ((f64::from(x) * std::f64::consts::PI) / 180.0) as f32;
            let y = height_scaling * (angle_rad / frequency).sin();
            let y_abs = y.abs();

            let base_step = if y_abs > 0.8 {
                1.0
            } else if y_abs > 0.5 {
                0.75
            } else {
                0.5
            };
            let step = base_step / height_scaling;

            let x_pos = (x + sx + ox) as i32;
            let y_pos = ((y * 100.0) + sy + oy) as i32;
            self.set_pixel(x_pos, y_pos);

            x += step;
        }
        Ok(())
    }

    /// Draw one animation frame.
    ///
    /// Clears to white, shows the background, draws the axes, every circle with its radius
    /// line and green cycle dot, then the blue sum dot. The sum dot's movement since
    /// `last_trace_point` is appended to `background`, which becomes visible from the next
    /// frame on. Finishes with [`Surface::present`].
    #[tracing::instrument(level = "trace", skip_all, fields(circles = circles.len()))]
    pub fn draw(
        &mut self,
        circles: &[Circle],
        background: &mut [u8],
        last_trace_point: Pixel,
    ) -> EpicycleResult<()> {
        self.surface.clear(Color::WHITE);
        self.surface.upload_background(
            background,
            self.bg_width,
            self.bg_height,
            self.bg_width as usize * BYTES_PER_PIXEL,
        )?;

        if let (Some(first), Some(last)) = (circles.first(), circles.last()) {
            let origin = first.center.round_to_pixel();
            self.set_solid_drawing(false);
            self.set_color(Color::GRAY_LIGHT);
            self.draw_line(
                Pixel::new(origin.x.saturating_sub(GRID_HALF_LENGTH), origin.y),
                Pixel::new(origin.x.saturating_add(GRID_HALF_LENGTH), origin.y),
            );
            self.draw_line(
                Pixel::new(origin.x, origin.y.saturating_sub(GRID_HALF_LENGTH)),
                Pixel::new(origin.x, origin.y.saturating_add(GRID_HALF_LENGTH)),
            );

            for c in circles {
                let center = c.center.round_to_pixel();
                let dot = c.cycle_dot.round_to_pixel();

                self.set_color(Color::GRAY_MEDIUM);
                self.set_solid_drawing(false);
                self.draw_circle_outline(c.radius, center);
                self.draw_line(center, dot);

                self.set_solid_drawing(true);
                self.set_color(Color::GREEN);
                self.draw_filled_dot(MARKER_RADIUS, dot);
            }

            let sum = last.cycle_dot.round_to_pixel();
            self.set_color(Color::BLUE);
            self.draw_filled_dot(MARKER_RADIUS, sum);
            self.set_solid_drawing(false);
            self.draw_line_to_background(background, last_trace_point, sum, Color::BLUE);
        }

        self.surface.present()
    }
}

/// Allocation-free Bresenham stepper shared by the surface and background line routines.
#[derive(Clone, Debug)]
struct BresenhamLine {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    fn new(from: Pixel, to: Pixel) -> Self {
        let (x0, y0) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: (if dx > dy { dx } else { -dy }) / 2,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.done {
            return None;
        }
        // Every visited point lies between the i32 endpoints.
        let p = Pixel::new(self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(p);
        }

        let err = self.err;
        if err > -self.dx {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if err < self.dy {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterizer.rs"]
mod tests;
