//! RGBA drawing color.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// RGBA color with 16-bit channels.
///
/// Channels are wider than a byte so that component-wise arithmetic has headroom; they are
/// narrowed with [`Color::to_rgba8`] at the pixel write. Addition, subtraction and
/// multiplication saturate. Division by a zero channel panics like integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
    /// Alpha channel.
    pub a: u16,
}

impl Color {
    /// Create a color with explicit RGBA channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Narrow to RGBA bytes, saturating channels above 255.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn narrow(c: u16) -> u8 {
            u8::try_from(c).unwrap_or(u8::MAX)
        }
        [narrow(self.r), narrow(self.g), narrow(self.b), narrow(self.a)]
    }

    fn zip(self, rhs: Self, f: impl Fn(u16, u16) -> u16) -> Self {
        Self::new(f(self.r, rhs.r), f(self.g, rhs.g), f(self.b, rhs.b), f(self.a, rhs.a))
    }

    /// Marker red.
    pub const RED: Color = Color::rgb(179, 0, 0);
    /// Cycle-dot green.
    pub const GREEN: Color = Color::rgb(0, 179, 0);
    /// Sum-dot and trail blue.
    pub const BLUE: Color = Color::rgb(0, 0, 179);
    /// Highlight yellow.
    pub const YELLOW: Color = Color::rgb(230, 184, 0);
    /// Black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Grid-axis gray.
    pub const GRAY_LIGHT: Color = Color::rgb(220, 220, 220);
    /// Circle outline gray.
    pub const GRAY_MEDIUM: Color = Color::rgb(191, 191, 191);
    /// Dark gray.
    pub const GRAY_DARK: Color = Color::rgb(115, 115, 115);
    /// Frame clear color.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

macro_rules! impl_color_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident => $f:expr;)*) => {$(
        impl $Op for Color {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                self.zip(rhs, $f)
            }
        }

        impl $Op<u16> for Color {
            type Output = Self;

            fn $op(self, rhs: u16) -> Self {
                self.zip(Color::new(rhs, rhs, rhs, rhs), $f)
            }
        }

        impl $OpAssign for Color {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl $OpAssign<u16> for Color {
            fn $op_assign(&mut self, rhs: u16) {
                *self = $Op::$op(*self, rhs);
            }
        }
    )*};
}

impl_color_ops! {
    Add::add, AddAssign::add_assign => u16::saturating_add;
    Sub::sub, SubAssign::sub_assign => u16::saturating_sub;
    Mul::mul, MulAssign::mul_assign => u16::saturating_mul;
    Div::div, DivAssign::div_assign => |a: u16, b: u16| a / b;
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/color.rs"]
mod tests;
