//! Elementwise math functions dispatched by scalar type.
//!
//! Generic code calls the free functions of this module ([`exp`], [`isnan`], [`pow`], ...) and the scalar type
//! selects the implementation at compile time through the [`Math`] trait. The trait is implemented for `f32`,
//! `f64`, [`bf16`](half::bf16), [`Complex<f32>`](num_complex::Complex) and
//! [`Complex<f64>`](num_complex::Complex):
//! - Real types apply the host math library directly.
//! - [`bf16`](half::bf16) widens to `f32`, applies the `f32` function and narrows the result back with the
//!   type's own conversion. [`abs`] is the exception and goes through `f64`.
//! - Complex types compute `exp`, `ceil`, `floor` and `round` from their components at the component's native
//!   precision, and delegate `log`, `tanh`, `sqrt`, `pow` and `abs` to [`num_complex`].
//!
//! None of the functions fail. Out of domain inputs produce NaN or infinity, exactly as the underlying
//! floating point functions do.
//!
//! ```
//! use half::bf16;
//! use num_complex::Complex;
//! use numext::math;
//!
//! assert_eq!(math::exp(bf16::ZERO), bf16::ONE);
//! assert_eq!(math::abs(Complex::new(3.0_f32, 4.0)), 5.0);
//! assert_eq!(math::ceil(Complex::new(1.2_f32, -1.7)), Complex::new(2.0, -1.0));
//! ```

mod bfloat16;
mod complex;
mod real;

use crate::traits::NumTraits;

/// Elementwise math functions of a scalar type.
pub trait Math: NumTraits {
    /// Whether the value is NaN. For complex values, whether either component is NaN.
    fn isnan(self) -> bool;
    /// Whether the value is infinite. For complex values, whether either component is infinite.
    fn isinf(self) -> bool;
    /// Whether the value is neither NaN nor infinite.
    fn isfinite(self) -> bool;

    /// The exponential function.
    fn exp(self) -> Self;
    /// The natural logarithm.
    fn log(self) -> Self;
    /// The square root.
    fn sqrt(self) -> Self;
    /// The hyperbolic tangent.
    fn tanh(self) -> Self;
    /// The smallest integer greater than or equal to the value.
    fn ceil(self) -> Self;
    /// The largest integer less than or equal to the value.
    fn floor(self) -> Self;
    /// The nearest integer, rounding half-way cases away from zero.
    fn round(self) -> Self;
    /// The value raised to the power `exponent`.
    fn pow(self, exponent: Self) -> Self;
    /// The absolute value, or the magnitude of a complex value.
    fn abs(self) -> Self::Real;
}

/// Elementwise math functions that are only defined for real scalar types.
pub trait RealMath: Math<Real = Self> {
    /// The error function.
    fn erf(self) -> Self;
}

/// Whether the value is NaN.
#[inline]
pub fn isnan<T: Math>(x: T) -> bool {
    x.isnan()
}

/// Whether the value is infinite.
#[inline]
pub fn isinf<T: Math>(x: T) -> bool {
    x.isinf()
}

/// Whether the value is neither NaN nor infinite.
#[inline]
pub fn isfinite<T: Math>(x: T) -> bool {
    x.isfinite()
}

/// The exponential function.
#[inline]
pub fn exp<T: Math>(x: T) -> T {
    x.exp()
}

/// The natural logarithm.
#[inline]
pub fn log<T: Math>(x: T) -> T {
    x.log()
}

/// The square root.
#[inline]
pub fn sqrt<T: Math>(x: T) -> T {
    x.sqrt()
}

/// The hyperbolic tangent.
#[inline]
pub fn tanh<T: Math>(x: T) -> T {
    x.tanh()
}

/// The error function.
#[inline]
pub fn erf<T: RealMath>(x: T) -> T {
    x.erf()
}

/// Round towards positive infinity.
#[inline]
pub fn ceil<T: Math>(x: T) -> T {
    x.ceil()
}

/// Round towards negative infinity.
#[inline]
pub fn floor<T: Math>(x: T) -> T {
    x.floor()
}

/// Round to the nearest integer, half-way cases away from zero.
#[inline]
pub fn round<T: Math>(x: T) -> T {
    x.round()
}

/// Raise `base` to the power `exponent`.
#[inline]
pub fn pow<T: Math>(base: T, exponent: T) -> T {
    base.pow(exponent)
}

/// The absolute value, or the magnitude of a complex value.
#[inline]
pub fn abs<T: Math>(x: T) -> T::Real {
    x.abs()
}

/// A unary value-to-value function of [`Math`], for callers that choose the function at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// [`exp`]
    Exp,
    /// [`log`]
    Log,
    /// [`sqrt`]
    Sqrt,
    /// [`tanh`]
    Tanh,
    /// [`ceil`]
    Ceil,
    /// [`floor`]
    Floor,
    /// [`round`]
    Round,
}
impl UnaryOp {
    /// All the unary operations.
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Exp,
        UnaryOp::Log,
        UnaryOp::Sqrt,
        UnaryOp::Tanh,
        UnaryOp::Ceil,
        UnaryOp::Floor,
        UnaryOp::Round,
    ];

    /// Apply the operation to a single value.
    #[inline]
    pub fn apply<T: Math>(self, x: T) -> T {
        match self {
            UnaryOp::Exp => x.exp(),
            UnaryOp::Log => x.log(),
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Tanh => x.tanh(),
            UnaryOp::Ceil => x.ceil(),
            UnaryOp::Floor => x.floor(),
            UnaryOp::Round => x.round(),
        }
    }

    /// The dispatch name of the operation, e.g. `"exp"`.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Exp => "exp",
            UnaryOp::Log => "log",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Tanh => "tanh",
            UnaryOp::Ceil => "ceil",
            UnaryOp::Floor => "floor",
            UnaryOp::Round => "round",
        }
    }
}
impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use half::bf16;
    use num_complex::Complex;

    use super::*;

    #[test]
    fn unary_op_matches_free_functions() {
        let x = 2.5_f32;
        let expected = [exp(x), log(x), sqrt(x), tanh(x), ceil(x), floor(x), round(x)];
        for (op, expected) in UnaryOp::ALL.into_iter().zip(expected) {
            assert_eq!(op.apply(x), expected, "{op}");
        }

        let z = Complex::new(0.5_f64, -1.5);
        assert_eq!(UnaryOp::Exp.apply(z), exp(z));
        assert_eq!(UnaryOp::Floor.apply(z), Complex::new(0.0, -2.0));

        let b = bf16::from_f32(2.5);
        assert_eq!(UnaryOp::Round.apply(b), bf16::from_f32(3.0));
    }

    #[test]
    fn generic_code_is_type_agnostic() {
        fn clamp_to_integer<T: Math>(x: T) -> (T, T) {
            (floor(x), ceil(x))
        }
        assert_eq!(clamp_to_integer(1.5_f64), (1.0, 2.0));
        assert_eq!(
            clamp_to_integer(bf16::from_f32(-1.5)),
            (bf16::from_f32(-2.0), bf16::from_f32(-1.0))
        );
        assert_eq!(
            clamp_to_integer(Complex::new(1.5_f32, -0.5)),
            (Complex::new(1.0, -1.0), Complex::new(2.0, -0.0))
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn unary_op_names() {
        let names: Vec<String> = UnaryOp::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(
            names,
            ["exp", "log", "sqrt", "tanh", "ceil", "floor", "round"]
        );
    }
}
