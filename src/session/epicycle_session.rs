use crate::chain::transform::{sum_dot, trace_start, transform_chain};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::geometry::circle::Circle;
use crate::geometry::vec2::Vec2d;
use crate::render::background::blank_background;
use crate::render::rasterizer::Rasterizer;
use crate::render::surface::Surface;
use crate::scene::config::SceneConfig;

/// Angle reached before the global angle wraps back to 1.
pub const ANGLE_WRAP: u32 = 360;

/// A running epicycle animation: the circle chain, its trail and the surface it draws on.
///
/// One [`EpicycleSession::step`] is one tick: advance the global angle by one degree,
/// re-solve the chain, draw it, and remember where the sum dot ended up so the next tick
/// can extend the trail from there.
#[derive(Debug)]
pub struct EpicycleSession<S: Surface> {
    canvas: Canvas,
    fps: Fps,
    circles: Vec<Circle>,
    background: Vec<u8>,
    rasterizer: Rasterizer<S>,
    angle: u32,
    prev_sum: Vec2d,
    frame: FrameIndex,
}

impl<S: Surface> EpicycleSession<S> {
    /// Validate `config` and bind a fresh session to `surface`.
    #[tracing::instrument(skip_all, fields(
        width = config.canvas.width,
        height = config.canvas.height,
        circles = config.circles.len()
    ))]
    pub fn new(config: &SceneConfig, surface: S) -> EpicycleResult<Self> {
        config.validate()?;
        let circles = config.build_circles();
        let prev_sum = trace_start(&circles)?;

        let mut rasterizer = Rasterizer::new(surface);
        rasterizer.update_background(config.canvas.width, config.canvas.height);

        tracing::debug!(x = prev_sum.x, y = prev_sum.y, "session started");
        Ok(Self {
            canvas: config.canvas,
            fps: config.fps,
            circles,
            background: blank_background(config.canvas),
            rasterizer,
            angle: 0,
            prev_sum,
            frame: FrameIndex(0),
        })
    }

    /// Advance one tick and draw it. Returns the index of the frame just drawn.
    pub fn step(&mut self) -> EpicycleResult<FrameIndex> {
        self.angle = if self.angle > ANGLE_WRAP {
            1
        } else {
            self.angle + 1
        };
        transform_chain(&mut self.circles, f64::from(self.angle))?;

        let last = self.prev_sum.round_to_pixel();
        self.rasterizer.draw(&self.circles, &mut self.background, last)?;

        self.prev_sum = sum_dot(&self.circles)
            .ok_or_else(|| EpicycleError::render("circle chain became empty"))?;
        let drawn = self.frame;
        self.frame = FrameIndex(self.frame.0 + 1);
        Ok(drawn)
    }

    /// Run `ticks` steps back to back.
    pub fn run(&mut self, ticks: u64) -> EpicycleResult<()> {
        for _ in 0..ticks {
            self.step()?;
        }
        tracing::debug!(frame = self.frame.0, angle = self.angle, "session ran");
        Ok(())
    }

    /// Follow a window resize: the surface is resized and the trail starts over on a white
    /// background of the new size.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, canvas: Canvas) -> EpicycleResult<()> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(EpicycleError::validation("canvas width/height must be > 0"));
        }
        self.rasterizer
            .surface_mut()
            .resize(canvas.width, canvas.height)?;
        self.background = blank_background(canvas);
        self.rasterizer.update_background(canvas.width, canvas.height);
        self.canvas = canvas;
        tracing::debug!("background reallocated");
        Ok(())
    }

    /// The chain as solved for the last drawn tick.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Persistent trail buffer, `[b, g, r, 0]` per pixel.
    pub fn background(&self) -> &[u8] {
        &self.background
    }

    /// Current canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Global angle in degrees of the last drawn tick (0 before the first step).
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Number of ticks drawn so far; also the index of the next frame.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Seconds of animation drawn so far at the configured rate.
    pub fn elapsed_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }

    /// Tip of the chain for the last drawn tick.
    pub fn sum_dot(&self) -> Option<Vec2d> {
        sum_dot(&self.circles)
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        self.rasterizer.surface()
    }

    /// End the session and return the surface.
    pub fn into_surface(self) -> S {
        self.rasterizer.into_surface()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/epicycle_session.rs"]
mod tests;
