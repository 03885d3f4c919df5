//! Extension trait for wrapping a failing `Result` into a [`ChainedError`].
//!
//! # Examples
//!
//! ```
//! use chained_error::traits::ResultExt;
//!
//! fn load_config() -> Result<String, chained_error::ChainedError> {
//!     std::fs::read_to_string("config.toml").wrap_err("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! ```

use core::error::Error;

use alloc::string::String;

use crate::types::ChainedError;

/// Adds a chain link on top of the error of a `Result`.
///
/// The original error becomes the cause of the new link. A `ChainedError`
/// cause keeps rendering verbosely.
pub trait ResultExt<T> {
    /// Wraps the error with `message`.
    fn wrap_err<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<String>;

    /// Wraps the error with a message built only on failure.
    ///
    /// ```
    /// use chained_error::traits::ResultExt;
    /// use std::io;
    ///
    /// let line = 23;
    /// let result: Result<(), io::Error> = Err(io::Error::other("syntax error"));
    /// let err = result.wrap_err_with(|| format!("parsing line {}", line)).unwrap_err();
    /// assert_eq!(err.to_string(), "parsing line 23: syntax error");
    /// ```
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, ChainedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Wraps the error with `message` and `detail`.
    fn wrap_err_detail<M, D>(self, message: M, detail: D) -> Result<T, ChainedError>
    where
        M: Into<String>,
        D: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn wrap_err<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<String>,
    {
        self.map_err(|e| ChainedError::msg(message).with_source(e))
    }

    #[inline]
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, ChainedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| ChainedError::msg(f()).with_source(e))
    }

    #[inline]
    fn wrap_err_detail<M, D>(self, message: M, detail: D) -> Result<T, ChainedError>
    where
        M: Into<String>,
        D: Into<String>,
    {
        self.map_err(|e| ChainedError::new(message, detail, None).with_source(e))
    }
}
