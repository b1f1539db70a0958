//! Epicycles draws a chain of rotating circles (a Fourier epicycle) and the curve traced by
//! its tip.
//!
//! The public API is session-oriented:
//!
//! - Describe the chain with a [`SceneConfig`] (or start from the default demo)
//! - Bind an [`EpicycleSession`] to a [`Surface`], e.g. the headless [`Framebuffer`]
//! - Call [`EpicycleSession::step`] once per tick
//!
//! Lower layers are public as well: [`transform_chain`] solves the chain for an angle and
//! [`Rasterizer`] draws lines, circles, dots, sine waves and whole frames through any
//! [`Surface`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod chain;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{EpicycleError, EpicycleResult};

pub use crate::chain::transform::{sum_dot, trace_start, transform_chain};
pub use crate::geometry::circle::Circle;
pub use crate::geometry::color::Color;
pub use crate::geometry::vec2::{Pixel, Vec2, Vec2d, Vec2f};
pub use crate::render::background::{
    BLANK_BYTE, BYTES_PER_PIXEL, FOURTH_CHANNEL, blank_background, pixel_offset,
};
pub use crate::render::framebuffer::Framebuffer;
pub use crate::render::rasterizer::{GRID_HALF_LENGTH, MARKER_RADIUS, Rasterizer};
pub use crate::render::surface::{FrameRGBA, Surface};
pub use crate::scene::config::{CircleDef, SceneConfig};
pub use crate::session::epicycle_session::{ANGLE_WRAP, EpicycleSession};
