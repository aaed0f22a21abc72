use num_traits::Float;

use super::{Math, RealMath};

macro_rules! impl_real_math {
    ($t:ty, erf = $erf:path) => {
        impl Math for $t {
            #[inline]
            fn isnan(self) -> bool {
                Float::is_nan(self)
            }
            #[inline]
            fn isinf(self) -> bool {
                Float::is_infinite(self)
            }
            #[inline]
            fn isfinite(self) -> bool {
                Float::is_finite(self)
            }
            #[inline]
            fn exp(self) -> Self {
                Float::exp(self)
            }
            #[inline]
            fn log(self) -> Self {
                Float::ln(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                Float::sqrt(self)
            }
            #[inline]
            fn tanh(self) -> Self {
                Float::tanh(self)
            }
            #[inline]
            fn ceil(self) -> Self {
                Float::ceil(self)
            }
            #[inline]
            fn floor(self) -> Self {
                Float::floor(self)
            }
            #[inline]
            fn round(self) -> Self {
                Float::round(self)
            }
            #[inline]
            fn pow(self, exponent: Self) -> Self {
                Float::powf(self, exponent)
            }
            #[inline]
            fn abs(self) -> Self {
                Float::abs(self)
            }
        }

        impl RealMath for $t {
            #[inline]
            fn erf(self) -> Self {
                $erf(self)
            }
        }
    };
}
impl_real_math!(f32, erf = libm::erff);
impl_real_math!(f64, erf = libm::erf);

#[cfg(test)]
mod tests {
    use crate::math;

    #[test]
    fn classification() {
        assert!(math::isnan(f32::NAN));
        assert!(!math::isnan(f64::INFINITY));
        assert!(math::isinf(f64::NEG_INFINITY));
        assert!(math::isfinite(f32::MAX));
        assert!(!math::isfinite(f32::NAN));
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(math::round(0.5_f32), 1.0);
        assert_eq!(math::round(-0.5_f32), -1.0);
        assert_eq!(math::round(2.5_f64), 3.0);
        assert_eq!(math::round(-2.4_f64), -2.0);
    }

    #[test]
    fn erf() {
        assert_eq!(math::erf(0.0_f32), 0.0);
        assert!((math::erf(1.0_f64) - 0.842_700_792_949_714_9).abs() < 1e-15);
        assert!((math::erf(-1.0_f32) + 0.842_700_8).abs() < 1e-6);
        assert_eq!(math::erf(f64::INFINITY), 1.0);
    }

    #[test]
    fn domain_errors_propagate() {
        assert!(math::isnan(math::log(-1.0_f32)));
        assert_eq!(math::log(0.0_f64), f64::NEG_INFINITY);
        assert!(math::isnan(math::sqrt(-4.0_f64)));
        assert_eq!(math::pow(0.0_f32, 0.0), 1.0);
    }
}
