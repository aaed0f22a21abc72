//! Per-scalar-type numeric metadata.
//!
//! Generic algorithms need to know a few facts about the scalar type they operate on: whether it is signed or
//! complex, how expensive reads/additions/multiplications are relative to each other, and a handful of special
//! values (epsilon, the largest finite value, infinity, ...). The [`NumTraits`] trait exposes these facts as
//! associated consts and functions, resolved at compile time from the type itself.
//!
//! [`NumTraits`] is implemented for `f32`, `f64`, [`bf16`] and the two complex types [`Complex<f32>`] and
//! [`Complex<f64>`]. The complex implementations delegate `epsilon`, `dummy_precision` and `digits10` to their
//! component type. The extreme values of [`SpecialValues`] are not defined for complex types; query
//! them on the component type, `<T as NumTraits>::Real`.

use half::bf16;
use num_complex::Complex;

/// A compile-time descriptor of a scalar type's algebraic classification and relative operation costs.
///
/// Obtained with [`descriptor`] or [`NumTraits::DESCRIPTOR`], or at runtime through
/// [`ScalarType::descriptor`](crate::scalar::ScalarType::descriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarTypeDescriptor {
    /// Whether the type can represent negative values.
    pub is_signed: bool,
    /// Whether the type is an integer type.
    pub is_integer: bool,
    /// Whether the type is a complex number type.
    pub is_complex: bool,
    /// Whether values of the type must be initialized before they are read.
    pub require_initialization: bool,
    /// Relative cost of reading a value from memory.
    pub read_cost: u32,
    /// Relative cost of adding two values.
    pub add_cost: u32,
    /// Relative cost of multiplying two values.
    pub mul_cost: u32,
}

/// Numeric metadata of a scalar type.
pub trait NumTraits: Copy + 'static {
    /// The real type underlying this type: `Self` for real types, the component type for complex types.
    type Real: NumTraits<Real = Self::Real> + PartialOrd;
    /// The type of literal constants mixed with values of this type.
    type Literal;

    /// Whether the type can represent negative values.
    const IS_SIGNED: bool;
    /// Whether the type is an integer type.
    const IS_INTEGER: bool;
    /// Whether the type is a complex number type.
    const IS_COMPLEX: bool;
    /// Whether values of the type must be initialized before they are read.
    const REQUIRE_INITIALIZATION: bool;
    /// Relative cost of reading a value from memory.
    const READ_COST: u32;
    /// Relative cost of adding two values.
    const ADD_COST: u32;
    /// Relative cost of multiplying two values.
    const MUL_COST: u32;

    /// All of the above flags and costs gathered in a single descriptor.
    const DESCRIPTOR: ScalarTypeDescriptor = ScalarTypeDescriptor {
        is_signed: Self::IS_SIGNED,
        is_integer: Self::IS_INTEGER,
        is_complex: Self::IS_COMPLEX,
        require_initialization: Self::REQUIRE_INITIALIZATION,
        read_cost: Self::READ_COST,
        add_cost: Self::ADD_COST,
        mul_cost: Self::MUL_COST,
    };

    /// The difference between 1 and the next representable value.
    fn epsilon() -> Self::Real;
    /// A loose tolerance used by approximate comparisons, see [`approx`](crate::approx).
    fn dummy_precision() -> Self::Real;
    /// The number of decimal digits that can be represented without change.
    fn digits10() -> i32;
}

/// Extreme and non-finite values of a real scalar type.
///
/// Not implemented for complex types.
pub trait SpecialValues: NumTraits {
    /// The largest finite value.
    fn highest() -> Self;
    /// The most negative finite value.
    fn lowest() -> Self;
    /// Positive infinity.
    fn infinity() -> Self;
    /// The canonical quiet NaN of the type.
    fn quiet_nan() -> Self;
}

/// Get the descriptor of a scalar type.
pub const fn descriptor<T: NumTraits>() -> ScalarTypeDescriptor {
    T::DESCRIPTOR
}

macro_rules! impl_real_num_traits {
    ($t:ty, dummy_precision = $dummy:expr) => {
        impl NumTraits for $t {
            type Real = $t;
            type Literal = $t;

            const IS_SIGNED: bool = true;
            const IS_INTEGER: bool = false;
            const IS_COMPLEX: bool = false;
            const REQUIRE_INITIALIZATION: bool = false;
            const READ_COST: u32 = 1;
            const ADD_COST: u32 = 1;
            const MUL_COST: u32 = 1;

            #[inline]
            fn epsilon() -> $t {
                <$t>::EPSILON
            }
            #[inline]
            fn dummy_precision() -> $t {
                $dummy
            }
            #[inline]
            fn digits10() -> i32 {
                <$t>::DIGITS as i32
            }
        }

        impl SpecialValues for $t {
            #[inline]
            fn highest() -> $t {
                <$t>::MAX
            }
            #[inline]
            fn lowest() -> $t {
                <$t>::MIN
            }
            #[inline]
            fn infinity() -> $t {
                <$t>::INFINITY
            }
            #[inline]
            fn quiet_nan() -> $t {
                <$t>::NAN
            }
        }
    };
}
impl_real_num_traits!(f32, dummy_precision = 1e-5);
impl_real_num_traits!(f64, dummy_precision = 1e-12);

/// Raw bit patterns of the [`bf16`] special values.
pub mod bf16_bits {
    /// 2^-7.
    pub const EPSILON: u16 = 0x3c00;
    /// The largest finite value, (2 - 2^-7) * 2^127.
    pub const HIGHEST: u16 = 0x7f7f;
    /// The most negative finite value.
    pub const LOWEST: u16 = 0xff7f;
    /// Positive infinity.
    pub const INFINITY: u16 = 0x7f80;
    /// Quiet NaN with the sign bit and the lowest payload bit set.
    pub const QUIET_NAN: u16 = 0xffc1;
}

const BF16_DUMMY_PRECISION: bf16 = bf16::from_f32_const(1e-5);

impl NumTraits for bf16 {
    type Real = bf16;
    type Literal = bf16;

    const IS_SIGNED: bool = true;
    const IS_INTEGER: bool = false;
    const IS_COMPLEX: bool = false;
    const REQUIRE_INITIALIZATION: bool = false;
    const READ_COST: u32 = 1;
    const ADD_COST: u32 = 1;
    const MUL_COST: u32 = 1;

    #[inline]
    fn epsilon() -> bf16 {
        bf16::from_bits(bf16_bits::EPSILON)
    }
    #[inline]
    fn dummy_precision() -> bf16 {
        BF16_DUMMY_PRECISION
    }
    #[inline]
    fn digits10() -> i32 {
        bf16::DIGITS as i32
    }
}

impl SpecialValues for bf16 {
    #[inline]
    fn highest() -> bf16 {
        bf16::from_bits(bf16_bits::HIGHEST)
    }
    #[inline]
    fn lowest() -> bf16 {
        bf16::from_bits(bf16_bits::LOWEST)
    }
    #[inline]
    fn infinity() -> bf16 {
        bf16::from_bits(bf16_bits::INFINITY)
    }
    #[inline]
    fn quiet_nan() -> bf16 {
        bf16::from_bits(bf16_bits::QUIET_NAN)
    }
}

/// A real type that can be the component of a complex scalar: `f32` or `f64`.
pub trait ComplexComponent:
    NumTraits<Real = Self, Literal = Self> + SpecialValues + num_traits::Float
{
    private_decl! {}
}
impl ComplexComponent for f32 {
    private_impl! {}
}
impl ComplexComponent for f64 {
    private_impl! {}
}

impl<T: ComplexComponent> NumTraits for Complex<T> {
    type Real = T;
    type Literal = T;

    const IS_SIGNED: bool = T::IS_SIGNED;
    const IS_INTEGER: bool = false;
    const IS_COMPLEX: bool = true;
    const REQUIRE_INITIALIZATION: bool = T::REQUIRE_INITIALIZATION;
    const READ_COST: u32 = 2 * T::READ_COST;
    const ADD_COST: u32 = 2 * T::ADD_COST;
    const MUL_COST: u32 = 4 * T::MUL_COST + 2 * T::ADD_COST;

    #[inline]
    fn epsilon() -> T {
        <T as NumTraits>::epsilon()
    }
    #[inline]
    fn dummy_precision() -> T {
        <T as NumTraits>::dummy_precision()
    }
    #[inline]
    fn digits10() -> i32 {
        <T as NumTraits>::digits10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_descriptors() {
        let expected = ScalarTypeDescriptor {
            is_signed: true,
            is_integer: false,
            is_complex: false,
            require_initialization: false,
            read_cost: 1,
            add_cost: 1,
            mul_cost: 1,
        };
        assert_eq!(descriptor::<f32>(), expected);
        assert_eq!(descriptor::<f64>(), expected);
        assert_eq!(descriptor::<bf16>(), expected);
    }

    #[test]
    fn complex_descriptors() {
        let expected = ScalarTypeDescriptor {
            is_signed: true,
            is_integer: false,
            is_complex: true,
            require_initialization: false,
            read_cost: 2,
            add_cost: 2,
            mul_cost: 6,
        };
        assert_eq!(descriptor::<Complex<f32>>(), expected);
        assert_eq!(descriptor::<Complex<f64>>(), expected);
    }

    #[test]
    fn complex_delegates_to_component() {
        assert_eq!(<Complex<f32> as NumTraits>::epsilon(), f32::EPSILON);
        assert_eq!(<Complex<f64> as NumTraits>::epsilon(), f64::EPSILON);
        assert_eq!(<Complex<f32> as NumTraits>::dummy_precision(), 1e-5_f32);
        assert_eq!(<Complex<f64> as NumTraits>::dummy_precision(), 1e-12_f64);
        assert_eq!(<Complex<f32> as NumTraits>::digits10(), 6);
        assert_eq!(<Complex<f64> as NumTraits>::digits10(), 15);
    }

    #[test]
    fn bf16_constants() {
        assert_eq!(<bf16 as NumTraits>::epsilon().to_f32(), 2f32.powi(-7));
        assert_eq!(<bf16 as NumTraits>::epsilon(), bf16::EPSILON);
        assert_eq!(bf16::highest(), bf16::MAX);
        assert_eq!(bf16::lowest(), bf16::MIN);
        assert_eq!(bf16::infinity().to_f32(), f32::INFINITY);
        assert_eq!(<bf16 as NumTraits>::digits10(), 2);

        let nan = bf16::quiet_nan();
        assert!(nan.is_nan());
        assert_ne!(nan.to_bits(), bf16::NAN.to_bits());
        // quiet bit set
        assert_ne!(nan.to_bits() & 0x0040, 0);
    }

    #[test]
    fn literal_is_the_real_type() {
        fn literal<T: NumTraits>(x: T::Literal) -> T::Literal {
            x
        }
        let x: f32 = literal::<Complex<f32>>(0.5);
        let y: f64 = literal::<Complex<f64>>(0.25);
        let z: bf16 = literal::<bf16>(bf16::ONE);
        assert_eq!((x, y, z), (0.5, 0.25, bf16::ONE));
    }

    #[test]
    fn bf16_dummy_precision() {
        let dummy = <bf16 as NumTraits>::dummy_precision();
        assert_eq!(dummy, bf16::from_f32(1e-5));
        assert!((dummy.to_f32() - 1e-5).abs() < 1e-7);
    }
}
