pub(crate) mod background;
pub(crate) mod framebuffer;
pub(crate) mod rasterizer;
pub(crate) mod surface;
