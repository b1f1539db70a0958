use crate::foundation::error::EpicycleResult;
use crate::geometry::color::Color;

/// A presented frame as RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Read one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Display-surface contract the rasterizer draws through.
///
/// A surface owns an on-screen framebuffer with a current draw color. Points outside the
/// surface must be ignored or clipped by the implementation; the rasterizer never
/// bounds-checks.
pub trait Surface {
    /// Set the color used by subsequent [`Surface::draw_point`] calls.
    fn set_draw_color(&mut self, color: Color);

    /// Plot one pixel in the current draw color.
    fn draw_point(&mut self, x: i32, y: i32);

    /// Fill the whole framebuffer with `color` (begin of a frame).
    fn clear(&mut self, color: Color);

    /// Copy a persistent `[b, g, r, _]` background buffer onto the framebuffer.
    ///
    /// `stride` is the number of bytes per row in `bytes`.
    fn upload_background(
        &mut self,
        bytes: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> EpicycleResult<()>;

    /// Publish the finished frame (end of a frame).
    fn present(&mut self) -> EpicycleResult<()>;

    /// Follow a window resize. Surfaces with a fixed size keep the default no-op.
    fn resize(&mut self, width: u32, height: u32) -> EpicycleResult<()> {
        let _ = (width, height);
        Ok(())
    }
}
