//! Elementwise math over [`ndarray`] arrays.
//!
//! Thin helpers that apply the [`math`](crate::math) functions to every element of an array, for any of the
//! supported scalar types. Unary functions return a new array of the same shape; binary functions check that the
//! shapes of their operands agree.

use std::ops::{Mul, Sub};

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::approx::is_approx;
use crate::log::debug;
use crate::math::{Math, RealMath, UnaryOp};
use crate::{Error, Result};

/// Apply a unary operation to every element of an array.
pub fn map<A, S, D>(array: &ArrayBase<S, D>, op: UnaryOp) -> Array<A, D>
where
    A: Math,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.mapv(|x| op.apply(x))
}

/// The elementwise absolute value, or magnitude for complex arrays.
pub fn abs<A, S, D>(array: &ArrayBase<S, D>) -> Array<A::Real, D>
where
    A: Math,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.mapv(|x| x.abs())
}

/// The elementwise error function of a real array.
pub fn erf<A, S, D>(array: &ArrayBase<S, D>) -> Array<A, D>
where
    A: RealMath,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.mapv(|x| x.erf())
}

/// Raise every element of `base` to the power of the matching element of `exponent`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the arrays have different shapes.
pub fn pow<A, S1, S2, D>(
    base: &ArrayBase<S1, D>,
    exponent: &ArrayBase<S2, D>,
) -> Result<Array<A, D>>
where
    A: Math,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    check_same_shape(base, exponent)?;
    Ok(Zip::from(base)
        .and(exponent)
        .map_collect(|&b, &e| b.pow(e)))
}

/// Whether no element of the array is NaN or infinite.
pub fn all_finite<A, S, D>(array: &ArrayBase<S, D>) -> bool
where
    A: Math,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().all(|x| x.isfinite())
}

/// Whether any element of the array is NaN.
pub fn any_nan<A, S, D>(array: &ArrayBase<S, D>) -> bool
where
    A: Math,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().any(|x| x.isnan())
}

/// The number of elements that are NaN or infinite.
pub fn count_non_finite<A, S, D>(array: &ArrayBase<S, D>) -> usize
where
    A: Math,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().filter(|x| !x.isfinite()).count()
}

/// Whether all the elements of two arrays are [approximately equal](crate::approx::is_approx).
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the arrays have different shapes.
pub fn all_close<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<bool>
where
    A: Math + Sub<Output = A>,
    A::Real: Mul<Output = A::Real>,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    check_same_shape(a, b)?;
    for ((index, &x), &y) in a.indexed_iter().zip(b.iter()) {
        if !is_approx(x, y) {
            debug!("arrays are not close at index {index:?}");
            return Ok(false);
        }
    }
    Ok(true)
}

fn check_same_shape<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<()>
where
    S1: Data,
    S2: Data,
    D: Dimension,
{
    if a.shape() != b.shape() {
        debug!("shape mismatch: {:?} != {:?}", a.shape(), b.shape());
        return Err(Error::ShapeMismatch);
    }
    Ok(())
}
