use half::bf16;
use num_traits::Float;

use super::{Math, RealMath};

// All functions except `abs` are evaluated in single precision.
#[inline]
fn widen(x: bf16) -> f32 {
    x.to_f32()
}

#[inline]
fn narrow(x: f32) -> bf16 {
    bf16::from_f32(x)
}

impl Math for bf16 {
    #[inline]
    fn isnan(self) -> bool {
        self.is_nan()
    }
    #[inline]
    fn isinf(self) -> bool {
        self.is_infinite()
    }
    #[inline]
    fn isfinite(self) -> bool {
        self.is_finite()
    }
    #[inline]
    fn exp(self) -> Self {
        narrow(Float::exp(widen(self)))
    }
    #[inline]
    fn log(self) -> Self {
        narrow(Float::ln(widen(self)))
    }
    #[inline]
    fn sqrt(self) -> Self {
        narrow(Float::sqrt(widen(self)))
    }
    #[inline]
    fn tanh(self) -> Self {
        narrow(Float::tanh(widen(self)))
    }
    #[inline]
    fn ceil(self) -> Self {
        narrow(Float::ceil(widen(self)))
    }
    #[inline]
    fn floor(self) -> Self {
        narrow(Float::floor(widen(self)))
    }
    #[inline]
    fn round(self) -> Self {
        narrow(Float::round(widen(self)))
    }
    #[inline]
    fn pow(self, exponent: Self) -> Self {
        narrow(Float::powf(widen(self), widen(exponent)))
    }
    #[inline]
    fn abs(self) -> Self {
        bf16::from_f64(Float::abs(self.to_f64()))
    }
}

impl RealMath for bf16 {
    #[inline]
    fn erf(self) -> Self {
        narrow(libm::erff(widen(self)))
    }
}
