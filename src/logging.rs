/// Conditional logging for development builds
///
/// The `log!` macro forwards to `log::debug!` in debug builds or when the
/// `console_logging` feature is enabled. In release builds it compiles to
/// nothing. Warnings and errors that callers must see go through the `log`
/// facade directly.
///
/// # Examples
///
/// ```rust
/// metro_graph::log!("Loaded {} stations", 68);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            $crate::logging::backend::debug!($($arg)+);
        }
    };
}

#[doc(hidden)]
pub use ::log as backend;
