//! Fuzzy comparisons driven by [`NumTraits::dummy_precision`](crate::traits::NumTraits::dummy_precision).
//!
//! Two values are approximately equal if their distance is small relative to the smaller of their magnitudes:
//! `|x - y| <= min(|x|, |y|) * precision`. The comparison is relative, so zero is only approximately equal to
//! zero, and NaN is never approximately equal to anything.

use std::ops::{Mul, Sub};

use crate::math::Math;

/// Whether `x` and `y` are equal up to `precision`.
#[inline]
pub fn is_approx_with<T>(x: T, y: T, precision: T::Real) -> bool
where
    T: Math + Sub<Output = T>,
    T::Real: Mul<Output = T::Real>,
{
    let (ax, ay) = (x.abs(), y.abs());
    let min = if ax <= ay { ax } else { ay };
    (x - y).abs() <= min * precision
}

/// Whether `x` and `y` are equal up to the type's [`dummy_precision`](crate::traits::NumTraits::dummy_precision).
#[inline]
pub fn is_approx<T>(x: T, y: T) -> bool
where
    T: Math + Sub<Output = T>,
    T::Real: Mul<Output = T::Real>,
{
    is_approx_with(x, y, T::dummy_precision())
}

/// Whether `x` is negligible compared to `y`: `|x| <= |y| * precision`.
#[inline]
pub fn is_much_smaller_than<T>(x: T, y: T, precision: T::Real) -> bool
where
    T: Math,
    T::Real: Mul<Output = T::Real>,
{
    x.abs() <= y.abs() * precision
}

/// Whether `x <= y`, or `x` and `y` are equal up to `precision`. Only defined for real types.
#[inline]
pub fn is_approx_or_less_than<T>(x: T, y: T, precision: T) -> bool
where
    T: Math<Real = T> + PartialOrd + Sub<Output = T> + Mul<Output = T>,
{
    x <= y || is_approx_with(x, y, precision)
}
