#![cfg_attr(deny_warnings, deny(warnings))]
// some new clippy::lint annotations are supported in latest Rust but not recognized by older versions
#![cfg_attr(deny_warnings, allow(unknown_lints))]
#![cfg_attr(deny_warnings, deny(missing_docs))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Numeric traits and elementwise math for scalar types that generic tensor code does not natively understand.
//!
//! Generic linear algebra and tensor algorithms are written once against a set of traits, and need every scalar
//! type to provide the same metadata and the same elementwise functions. This crate provides them for the
//! reduced precision [`bf16`](half::bf16) type and the complex types [`Complex<f32>`](num_complex::Complex) and
//! [`Complex<f64>`](num_complex::Complex), alongside the native `f32` and `f64`:
//! - [`traits::NumTraits`]: a compile-time descriptor of the type (signedness, "is complex", relative
//!   operation costs) and its tolerances (`epsilon`, `dummy_precision`, `digits10`).
//! - [`traits::SpecialValues`]: `highest`, `lowest`, `infinity` and `quiet_nan` of the real types. The `bf16`
//!   values are exact bit patterns.
//! - [`math::Math`]: classification predicates and elementary functions (`exp`, `log`, `sqrt`, `tanh`, `ceil`,
//!   `floor`, `round`, `pow`, `abs`), exposed under uniform names by the free functions of the [`math`] module.
//!
//! All of the above are pure functions selected at compile time; there is no runtime registration and no state.
//!
//! ```
//! use half::bf16;
//! use num_complex::Complex;
//! use numext::math::{self, Math};
//! use numext::traits::{NumTraits, SpecialValues};
//!
//! fn count_non_finite<T: Math>(values: &[T]) -> usize {
//!     values.iter().filter(|x| !math::isfinite(**x)).count()
//! }
//!
//! assert_eq!(count_non_finite(&[bf16::ONE, bf16::infinity(), bf16::quiet_nan()]), 2);
//! assert_eq!(count_non_finite(&[Complex::new(1.0_f64, f64::NAN)]), 1);
//!
//! assert_eq!(bf16::quiet_nan().to_bits(), 0xffc1);
//! assert!(<Complex<f32> as NumTraits>::IS_COMPLEX);
//! assert_eq!(<Complex<f64> as NumTraits>::epsilon(), f64::EPSILON);
//! ```
//!
//! In addition, the [`scalar`] module provides runtime tags for the supported types, the [`approx`] module
//! fuzzy comparisons, and the [`array`] module elementwise helpers for `ndarray` arrays.
//!
//! ## Cargo Features
//! - `std`:
//!   Enable the standard library. This feature is enabled by default, but can be disabled to build
//!   [`numext`](crate) in a `no_std` environment, in which case the transcendental functions are provided by
//!   the `libm` crate.
//! - `ndarray`:
//!   Elementwise functions over `ndarray` arrays, in the [`array`] module.
//!   Adds a dependency to the `ndarray` crate.
//!   This feature is enabled by default.
//!
//! By default the `std` and `ndarray` features are enabled.
//!
//! ## Logging
//! The crate logs through the [`log`](https://docs.rs/log) facade with the `numext` target. The numeric
//! functions never log; only the runtime surfaces do, when they reject an input.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[macro_use]
mod private;
pub mod approx;
mod error;
mod log;
pub mod math;
pub mod scalar;
pub mod traits;

pub(crate) use error::Result;
pub use error::Error;

pub use half;
pub use num_complex;

cfg_if::cfg_if! { if #[cfg(feature = "ndarray")] {
    pub mod array;
    pub use ndarray;
} }
