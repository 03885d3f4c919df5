//! Macros that record where a chain link was created.
//!
//! - [`macro@crate::here`] - expands to `"file:line"` of the call site.
//! - [`macro@crate::chained`] - builds a [`ChainedError`](crate::ChainedError) from a
//!   format string, with `here!()` as its detail, optionally wrapping a source.
//!
//! # Examples
//!
//! ```
//! use chained_error::{chained, render};
//! use std::io;
//!
//! let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected EOF");
//! let err = chained!(source = eof; "parsing line {}", 23);
//!
//! assert_eq!(err.to_string(), "parsing line 23: unexpected EOF");
//! assert!(render("%+v", &err).unwrap().starts_with("parsing line 23\n\t"));
//! ```

/// Expands to a `&'static str` of the form `"file:line"` for the call site.
///
/// # Examples
///
/// ```
/// let location = chained_error::here!();
/// assert!(location.contains(".rs:"));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        concat!(file!(), ":", line!())
    };
}

/// Creates a [`ChainedError`](crate::ChainedError) whose detail is the call site.
///
/// # Syntax
///
/// - `chained!("fmt", args...)` - a single link
/// - `chained!(source = expr; "fmt", args...)` - a link wrapping `expr` as its cause
///
/// # Examples
///
/// ```
/// use chained_error::chained;
///
/// let err = chained!("user {} not found", 42);
/// assert_eq!(err.message(), "user 42 not found");
/// assert!(err.detail().contains(".rs:"));
/// ```
#[macro_export]
macro_rules! chained {
    (source = $source:expr; $($arg:tt)+) => {
        $crate::ChainedError::msg($crate::__private::format!($($arg)+))
            .with_detail($crate::here!())
            .with_source($source)
    };
    ($($arg:tt)+) => {
        $crate::ChainedError::msg($crate::__private::format!($($arg)+)).with_detail($crate::here!())
    };
}
