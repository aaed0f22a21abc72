pub(crate) const TARGET: &str = "numext";

macro_rules! emit {
    ($level:ident, $($arg:tt)*) => {{
        ::log::log!(target: crate::log::TARGET, ::log::Level::$level, $($arg)*);
    }}
}
macro_rules! debug {
    ($($arg:tt)*) => {{
        crate::log::emit!(Debug, $($arg)*);
    }}
}
pub(crate) use debug;
pub(crate) use emit;
