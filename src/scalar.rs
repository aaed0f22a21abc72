//! Runtime tags for the supported scalar types.
//!
//! The numeric traits of this crate are resolved at compile time. When the scalar type is only known at runtime,
//! for example from a dtype string in a config file, the [`ScalarType`] enum provides the same metadata as a
//! value. Every supported Rust type implements [`Scalar`], which maps it to its tag.

use half::bf16;
use num_complex::Complex;

use crate::log::debug;
use crate::traits::{NumTraits, ScalarTypeDescriptor, SpecialValues};
use crate::{Error, Result};

/// A complex number with `f32` components.
pub type Complex64 = Complex<f32>;
/// A complex number with `f64` components.
pub type Complex128 = Complex<f64>;

/// The scalar types supported by this crate.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalarType {
    /// 32-bit floating point, `f32`
    Float,
    /// 64-bit floating point, `f64`
    Double,
    /// 16-bit floating point using the bfloat16 format, [`bf16`].
    BFloat16,
    /// Complex number with 32-bit floating point components, [`Complex64`].
    ComplexFloat,
    /// Complex number with 64-bit floating point components, [`Complex128`].
    ComplexDouble,
}

/// A named special value of a scalar type, see [`ScalarType::special_value`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SpecialValue {
    /// [`NumTraits::epsilon`]
    Epsilon,
    /// [`NumTraits::dummy_precision`]
    DummyPrecision,
    /// [`SpecialValues::highest`]
    Highest,
    /// [`SpecialValues::lowest`]
    Lowest,
    /// [`SpecialValues::infinity`]
    Infinity,
    /// [`SpecialValues::quiet_nan`]
    QuietNan,
}

impl ScalarType {
    /// All the supported scalar types.
    pub const ALL: [ScalarType; 5] = [
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::BFloat16,
        ScalarType::ComplexFloat,
        ScalarType::ComplexDouble,
    ];

    /// Get the tag of a Rust scalar type.
    pub const fn of<T: Scalar>() -> Self {
        T::TYPE
    }

    /// The canonical dtype name of the scalar type, e.g. `"bfloat16"` or `"complex64"`.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Float => "float32",
            ScalarType::Double => "float64",
            ScalarType::BFloat16 => "bfloat16",
            ScalarType::ComplexFloat => "complex64",
            ScalarType::ComplexDouble => "complex128",
        }
    }

    /// The size of a single value in bytes.
    pub fn element_size(self) -> usize {
        match self {
            ScalarType::Float => std::mem::size_of::<f32>(),
            ScalarType::Double => std::mem::size_of::<f64>(),
            ScalarType::BFloat16 => std::mem::size_of::<bf16>(),
            ScalarType::ComplexFloat => std::mem::size_of::<Complex64>(),
            ScalarType::ComplexDouble => std::mem::size_of::<Complex128>(),
        }
    }

    /// The tag of the real type underlying this type: itself for real types, the component type for complex types.
    pub fn real(self) -> ScalarType {
        match self {
            ScalarType::ComplexFloat => ScalarType::Float,
            ScalarType::ComplexDouble => ScalarType::Double,
            real => real,
        }
    }

    /// The descriptor of the scalar type, identical to the compile-time [`NumTraits::DESCRIPTOR`].
    pub fn descriptor(self) -> ScalarTypeDescriptor {
        match self {
            ScalarType::Float => f32::DESCRIPTOR,
            ScalarType::Double => f64::DESCRIPTOR,
            ScalarType::BFloat16 => bf16::DESCRIPTOR,
            ScalarType::ComplexFloat => Complex64::DESCRIPTOR,
            ScalarType::ComplexDouble => Complex128::DESCRIPTOR,
        }
    }

    /// [`NumTraits::digits10`] of the scalar type.
    pub fn digits10(self) -> i32 {
        match self {
            ScalarType::Float => f32::digits10(),
            ScalarType::Double => f64::digits10(),
            ScalarType::BFloat16 => bf16::digits10(),
            ScalarType::ComplexFloat => Complex64::digits10(),
            ScalarType::ComplexDouble => Complex128::digits10(),
        }
    }

    /// Get a special value of the scalar type, widened to `f64`.
    ///
    /// For complex types the value is of the component type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] when querying `Highest`, `Lowest`, `Infinity` or `QuietNan` of a complex
    /// type; these are only defined for the component type, see [`real`](Self::real).
    pub fn special_value(self, value: SpecialValue) -> Result<f64> {
        fn real_special_value<T>(value: SpecialValue, widen: impl Fn(T) -> f64) -> f64
        where
            T: SpecialValues + NumTraits<Real = T>,
        {
            match value {
                SpecialValue::Epsilon => widen(T::epsilon()),
                SpecialValue::DummyPrecision => widen(T::dummy_precision()),
                SpecialValue::Highest => widen(T::highest()),
                SpecialValue::Lowest => widen(T::lowest()),
                SpecialValue::Infinity => widen(T::infinity()),
                SpecialValue::QuietNan => widen(T::quiet_nan()),
            }
        }

        Ok(match self {
            ScalarType::Float => real_special_value::<f32>(value, f64::from),
            ScalarType::Double => real_special_value::<f64>(value, |x| x),
            ScalarType::BFloat16 => real_special_value::<bf16>(value, bf16::to_f64),
            ScalarType::ComplexFloat | ScalarType::ComplexDouble => match value {
                SpecialValue::Epsilon | SpecialValue::DummyPrecision => {
                    return self.real().special_value(value)
                }
                _ => {
                    debug!("{value:?} is not defined for complex type {}", self.name());
                    return Err(Error::NotSupported);
                }
            },
        })
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ScalarType {
    type Err = Error;

    /// Parse a dtype name.
    ///
    /// Accepts the canonical names of [`ScalarType::name`] and the common aliases `float`, `f32`, `double`,
    /// `f64`, `bf16`, `complex<float>`, `c64`, `complex<double>` and `c128`. Matching is case insensitive.
    fn from_str(s: &str) -> Result<Self> {
        const NAMES: &[(&str, ScalarType)] = &[
            ("float32", ScalarType::Float),
            ("float", ScalarType::Float),
            ("f32", ScalarType::Float),
            ("float64", ScalarType::Double),
            ("double", ScalarType::Double),
            ("f64", ScalarType::Double),
            ("bfloat16", ScalarType::BFloat16),
            ("bf16", ScalarType::BFloat16),
            ("complex64", ScalarType::ComplexFloat),
            ("complex<float>", ScalarType::ComplexFloat),
            ("c64", ScalarType::ComplexFloat),
            ("complex128", ScalarType::ComplexDouble),
            ("complex<double>", ScalarType::ComplexDouble),
            ("c128", ScalarType::ComplexDouble),
        ];
        let name = s.trim();
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, t)| *t)
            .ok_or_else(|| {
                debug!("unknown scalar type name: {s:?}");
                Error::UnknownScalarType
            })
    }
}

/// A trait for the Rust types supported by this crate.
///
/// Sealed, implemented for `f32`, `f64`, [`bf16`], [`Complex64`] and [`Complex128`].
pub trait Scalar: NumTraits {
    /// The [`ScalarType`] enum variant of the implementing type.
    const TYPE: ScalarType;
    private_decl! {}
}
macro_rules! impl_scalar {
    ($rust_type:path, $scalar_type_variant:ident) => {
        impl Scalar for $rust_type {
            const TYPE: ScalarType = ScalarType::$scalar_type_variant;
            private_impl! {}
        }
    };
}
impl_scalar!(f32, Float);
impl_scalar!(f64, Double);
impl_scalar!(bf16, BFloat16);
impl_scalar!(Complex64, ComplexFloat);
impl_scalar!(Complex128, ComplexDouble);
