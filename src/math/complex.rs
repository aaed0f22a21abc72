use num_complex::Complex;
use num_traits::Float;

use super::Math;
use crate::traits::ComplexComponent;

impl<T: ComplexComponent> Math for Complex<T> {
    #[inline]
    fn isnan(self) -> bool {
        Float::is_nan(self.re) || Float::is_nan(self.im)
    }
    #[inline]
    fn isinf(self) -> bool {
        // Not `Complex::is_infinite`, which is false when the other component is NaN.
        Float::is_infinite(self.re) || Float::is_infinite(self.im)
    }
    #[inline]
    fn isfinite(self) -> bool {
        Float::is_finite(self.re) && Float::is_finite(self.im)
    }

    /// Euler's identity, `exp(re) * (cos(im) + i sin(im))`, in the component's precision.
    #[inline]
    fn exp(self) -> Self {
        let magnitude = Float::exp(self.re);
        Complex::new(
            magnitude * Float::cos(self.im),
            magnitude * Float::sin(self.im),
        )
    }
    #[inline]
    fn log(self) -> Self {
        Complex::ln(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }
    #[inline]
    fn tanh(self) -> Self {
        Complex::tanh(self)
    }
    #[inline]
    fn ceil(self) -> Self {
        Complex::new(Float::ceil(self.re), Float::ceil(self.im))
    }
    #[inline]
    fn floor(self) -> Self {
        Complex::new(Float::floor(self.re), Float::floor(self.im))
    }
    #[inline]
    fn round(self) -> Self {
        Complex::new(Float::round(self.re), Float::round(self.im))
    }
    #[inline]
    fn pow(self, exponent: Self) -> Self {
        Complex::powc(self, exponent)
    }
    #[inline]
    fn abs(self) -> T {
        Complex::norm(self)
    }
}
