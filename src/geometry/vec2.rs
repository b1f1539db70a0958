//! Generic two-component vector.
//!
//! The same type serves continuous math (`Vec2<f64>`) and pixel coordinates (`Vec2<i32>`).
//! Pixel coordinates are signed so that intermediate values such as `center.x - radius`
//! never wrap; narrowing happens at the surface write boundary.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num::{NumCast, One, ToPrimitive};

/// A 2D vector with component-wise arithmetic.
///
/// Equality is component-wise. Comparison is by Euclidean length through the `length_*`
/// methods: `a.length_lt(&b)` iff `a.length() < b.length()`, and `length_le`/`length_ge` are
/// the negations of `length_gt`/`length_lt`, so `(3, 4)` and `(4, 3)` are mutually `<=`.
/// There is no `PartialOrd` impl since that order would disagree with `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component (grows downward in screen space).
    pub y: T,
}

/// Screen-space pixel coordinate.
pub type Pixel = Vec2<i32>;
/// Single-precision vector.
pub type Vec2f = Vec2<f32>;
/// Double-precision vector used for circle positions.
pub type Vec2d = Vec2<f64>;

impl<T> Vec2<T> {
    /// Create a vector from its components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Create a vector with both components set to `v`.
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }

    /// Convert each component to another numeric type, `None` if either does not fit.
    pub fn cast<U: NumCast>(self) -> Option<Vec2<U>>
    where
        T: ToPrimitive,
    {
        Some(Vec2::new(U::from(self.x)?, U::from(self.y)?))
    }
}

impl<T: Copy + ToPrimitive> Vec2<T> {
    /// Euclidean length `sqrt(x² + y²)`, computed in `f64` for every component type.
    pub fn length(&self) -> f64 {
        let x = self.x.to_f64().unwrap_or(f64::NAN);
        let y = self.y.to_f64().unwrap_or(f64::NAN);
        ((x * x) + (y * y)).sqrt()
    }

    /// Compare two vectors by length only.
    pub fn cmp_length(&self, rhs: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&rhs.length())
    }

    /// `|self| < |rhs|`.
    pub fn length_lt(&self, rhs: &Self) -> bool {
        self.length() < rhs.length()
    }

    /// `|self| > |rhs|`.
    pub fn length_gt(&self, rhs: &Self) -> bool {
        rhs.length_lt(self)
    }

    /// Not longer than `rhs`.
    pub fn length_le(&self, rhs: &Self) -> bool {
        !self.length_gt(rhs)
    }

    /// Not shorter than `rhs`.
    pub fn length_ge(&self, rhs: &Self) -> bool {
        !self.length_lt(rhs)
    }
}

impl<T: Copy + Mul<Output = T> + Add<Output = T> + Sub<Output = T>> Vec2<T> {
    /// Dot product.
    pub fn dot(&self, rhs: &Self) -> T {
        (self.x * rhs.x) + (self.y * rhs.y)
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(&self, rhs: &Self) -> T {
        (self.x * rhs.y) - (self.y * rhs.x)
    }
}

impl<T: Copy + One + AddAssign + SubAssign> Vec2<T> {
    /// Add one to both components.
    pub fn inc(&mut self) -> &mut Self {
        self.x += T::one();
        self.y += T::one();
        self
    }

    /// Subtract one from both components.
    pub fn dec(&mut self) -> &mut Self {
        self.x -= T::one();
        self.y -= T::one();
        self
    }

    /// Increment and return the value from before the increment.
    pub fn post_inc(&mut self) -> Self {
        let before = *self;
        self.inc();
        before
    }

    /// Decrement and return the value from before the decrement.
    pub fn post_dec(&mut self) -> Self {
        let before = *self;
        self.dec();
        before
    }
}

impl Vec2<f64> {
    /// Round to the nearest pixel (half away from zero), saturating at the `i32` range.
    pub fn round_to_pixel(self) -> Pixel {
        Pixel::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Vec2<i32> {
    /// Widen a pixel coordinate to a continuous vector.
    pub fn to_f64(self) -> Vec2d {
        Vec2d::new(<f64 as From<i32>>::from(self.x), <f64 as From<i32>>::from(self.y))
    }
}

macro_rules! impl_vec_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)*) => {$(
        impl<T: Copy + $Op<Output = T>> $Op for Vec2<T> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                Self::new(self.x.$op(rhs.x), self.y.$op(rhs.y))
            }
        }

        impl<T: Copy + $OpAssign> $OpAssign for Vec2<T> {
            fn $op_assign(&mut self, rhs: Self) {
                self.x.$op_assign(rhs.x);
                self.y.$op_assign(rhs.y);
            }
        }
    )*};
}

impl_vec_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// Scalar operands are implemented per concrete type so that `scalar op vec` works too.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl_scalar_ops!(@op $t, Add::add, AddAssign::add_assign);
        impl_scalar_ops!(@op $t, Sub::sub, SubAssign::sub_assign);
        impl_scalar_ops!(@op $t, Mul::mul, MulAssign::mul_assign);
        impl_scalar_ops!(@op $t, Div::div, DivAssign::div_assign);

        impl Add<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn add(self, rhs: Vec2<$t>) -> Vec2<$t> {
                rhs + self
            }
        }

        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> {
                rhs * self
            }
        }
    )*};
    (@op $t:ty, $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
        impl $Op<$t> for Vec2<$t> {
            type Output = Self;

            fn $op(self, rhs: $t) -> Self {
                Self::new(self.x.$op(rhs), self.y.$op(rhs))
            }
        }

        impl $OpAssign<$t> for Vec2<$t> {
            fn $op_assign(&mut self, rhs: $t) {
                self.x.$op_assign(rhs);
                self.y.$op_assign(rhs);
            }
        }
    };
}

impl_scalar_ops!(f32, f64, i32, i64, u16, u32);

#[cfg(test)]
#[path = "../../tests/unit/geometry/vec2.rs"]
mod tests;
