//! Error types used in the [`numext`](crate) crate.
//!
//! The numeric cores ([`traits`](crate::traits) and [`math`](crate::math)) never fail; domain errors
//! propagate as NaN or infinity. Only the runtime surfaces built on top of them return errors.

/// numext Error type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A dtype name does not name any supported scalar type.
    UnknownScalarType,
    /// The operation is not defined for the requested scalar type.
    ///
    /// For example, complex scalar types do not define `highest`, `lowest`, `infinity` or `quiet_nan`;
    /// those must be queried on the component type.
    NotSupported,
    /// The two operands of a binary array operation have different shapes.
    ShapeMismatch,
}
impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, fmt)
    }
}
#[cfg(any(error_in_core, feature = "std"))]
impl std::error::Error for Error {}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
