//! Value types shared by the chain transform and the rasterizer.

pub(crate) mod circle;
pub(crate) mod color;
pub(crate) mod vec2;
