//! The `Float` sub-trait of `Number` for floating point types.
//!
//! Floats carry the transcendental operations and angle constants that the
//! spherical and angular distance computations need.

use core::ops::Neg;

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
pub trait Float: Number + Neg<Output = Self> {
    /// Archimedes' constant.
    const PI: Self;

    /// The full circle constant, `2 * PI`.
    const TWO_PI: Self;

    /// The positive infinity, used as the sentinel exponent for the
    /// Chebyshev limit of the p-norm family.
    const INFINITY: Self;

    /// Returns the square root of a `Float`.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns `self` raised to the power of `exp`.
    #[must_use]
    fn powf(self, exp: Self) -> Self;

    /// Returns the sine of `self` (in radians).
    #[must_use]
    fn sin(self) -> Self;

    /// Returns the cosine of `self` (in radians).
    #[must_use]
    fn cos(self) -> Self;

    /// Returns the arcsine of `self`, in radians.
    #[must_use]
    fn asin(self) -> Self;

    /// Returns the arccosine of `self`, in radians.
    #[must_use]
    fn acos(self) -> Self;

    /// Whether `self` is positive or negative infinity.
    fn is_infinite(self) -> bool;

    /// Whether `self` is `NaN`.
    fn is_nan(self) -> bool;
}

impl Float for f32 {
    const PI: Self = core::f32::consts::PI;
    const TWO_PI: Self = core::f32::consts::TAU;
    const INFINITY: Self = Self::INFINITY;

    fn sqrt(self) -> Self {
        Self::sqrt(self)
    }

    fn powf(self, exp: Self) -> Self {
        Self::powf(self, exp)
    }

    fn sin(self) -> Self {
        Self::sin(self)
    }

    fn cos(self) -> Self {
        Self::cos(self)
    }

    fn asin(self) -> Self {
        Self::asin(self)
    }

    fn acos(self) -> Self {
        Self::acos(self)
    }

    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }

    fn is_nan(self) -> bool {
        Self::is_nan(self)
    }
}

impl Float for f64 {
    const PI: Self = core::f64::consts::PI;
    const TWO_PI: Self = core::f64::consts::TAU;
    const INFINITY: Self = Self::INFINITY;

    fn sqrt(self) -> Self {
        Self::sqrt(self)
    }

    fn powf(self, exp: Self) -> Self {
        Self::powf(self, exp)
    }

    fn sin(self) -> Self {
        Self::sin(self)
    }

    fn cos(self) -> Self {
        Self::cos(self)
    }

    fn asin(self) -> Self {
        Self::asin(self)
    }

    fn acos(self) -> Self {
        Self::acos(self)
    }

    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }

    fn is_nan(self) -> bool {
        Self::is_nan(self)
    }
}
