use crate::foundation::core::Canvas;
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::geometry::color::Color;
use crate::render::background::{BYTES_PER_PIXEL, pixel_offset};
use crate::render::surface::{FrameRGBA, Surface};

/// Headless [`Surface`] backed by an RGBA8 back buffer.
///
/// `present` snapshots the back buffer into [`Framebuffer::frame`], standing in for a
/// window flip.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    canvas: Canvas,
    back: Vec<u8>,
    front: FrameRGBA,
    draw_rgba: [u8; 4],
    presented: u64,
}

impl Framebuffer {
    /// Create a white framebuffer for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let back = vec![255; canvas.byte_len()];
        Self {
            canvas,
            front: FrameRGBA {
                width: canvas.width,
                height: canvas.height,
                data: back.clone(),
            },
            back,
            draw_rgba: [0, 0, 0, 255],
            presented: 0,
        }
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Last presented frame.
    pub fn frame(&self) -> &FrameRGBA {
        &self.front
    }

    /// Number of `present` calls so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Read a back-buffer pixel (what has been drawn since the last clear).
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some([
            self.back[i],
            self.back[i + 1],
            self.back[i + 2],
            self.back[i + 3],
        ])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.canvas.contains(i64::from(x), i64::from(y)) {
            return None;
        }
        Some(pixel_offset(
            self.canvas.width as usize,
            x as usize,
            y as usize,
        ))
    }
}

impl Surface for Framebuffer {
    fn set_draw_color(&mut self, color: Color) {
        let [r, g, b, _] = color.to_rgba8();
        self.draw_rgba = [r, g, b, 255];
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.back[i..i + BYTES_PER_PIXEL].copy_from_slice(&self.draw_rgba);
        }
    }

    fn clear(&mut self, color: Color) {
        let [r, g, b, _] = color.to_rgba8();
        for px in self.back.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn upload_background(
        &mut self,
        bytes: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> EpicycleResult<()> {
        if width != self.canvas.width || height != self.canvas.height {
            return Err(EpicycleError::validation(format!(
                "background is {width}x{height}, surface is {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        let row_bytes = self.canvas.stride();
        if stride < row_bytes {
            return Err(EpicycleError::validation(format!(
                "background stride {stride} is smaller than a row ({row_bytes} bytes)"
            )));
        }
        if bytes.len() < stride.saturating_mul(height as usize) {
            return Err(EpicycleError::validation(format!(
                "background holds {} bytes, expected at least {}",
                bytes.len(),
                stride.saturating_mul(height as usize)
            )));
        }

        // Source pixels are [b, g, r, _]; the fourth byte is not blended.
        for (src_row, dst_row) in bytes
            .chunks(stride)
            .zip(self.back.chunks_exact_mut(row_bytes))
        {
            for (src, dst) in src_row[..row_bytes]
                .chunks_exact(BYTES_PER_PIXEL)
                .zip(dst_row.chunks_exact_mut(BYTES_PER_PIXEL))
            {
                dst.copy_from_slice(&[src[2], src[1], src[0], 255]);
            }
        }
        Ok(())
    }

    fn present(&mut self) -> EpicycleResult<()> {
        self.front.data.copy_from_slice(&self.back);
        self.presented = self.presented.saturating_add(1);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> EpicycleResult<()> {
        let canvas = Canvas::new(width, height)?;
        let draw_rgba = self.draw_rgba;
        let presented = self.presented;
        *self = Self::new(canvas);
        self.draw_rgba = draw_rgba;
        self.presented = presented;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/framebuffer.rs"]
mod tests;
