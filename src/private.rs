//! Sealing of traits that only this crate may implement.

/// Return type of the hidden method of sealed traits, unnameable outside the crate.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// This trait is sealed; it can only be implemented by this crate.
        #[doc(hidden)]
        fn __private_method(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private_method(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
