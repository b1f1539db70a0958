//! Persistent trail buffer layout.
//!
//! The background is a caller-owned byte buffer of `width * height * 4` bytes, row-major,
//! with each pixel stored as `[b, g, r, 0]`. The core only ever writes into it.

use crate::foundation::core::Canvas;

/// Bytes per background pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Value written into the fourth byte of every trail pixel.
pub const FOURTH_CHANNEL: u8 = 0;

/// Fill value of a freshly allocated background (opaque white).
pub const BLANK_BYTE: u8 = 255;

/// Allocate a white background for `canvas`.
pub fn blank_background(canvas: Canvas) -> Vec<u8> {
    vec![BLANK_BYTE; canvas.byte_len()]
}

/// Byte offset of pixel `(x, y)` in a buffer `width` pixels wide.
pub fn pixel_offset(width: usize, x: usize, y: usize) -> usize {
    (width * BYTES_PER_PIXEL * y) + (x * BYTES_PER_PIXEL)
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
