//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use chained_error::prelude::*;
//!
//! fn read_header() -> Result<String, ChainedError> {
//!     std::fs::read_to_string("header.bin").wrap_err("reading header")
//! }
//!
//! let err = read_header().unwrap_err();
//! assert!(render("%+v", &err).unwrap().starts_with("reading header\n"));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chained!`], [`here!`]
//! - **Types**: [`ChainedError`], [`Cause`], [`FormatSpec`], [`Flag`]
//! - **Traits**: [`ErrorFormatter`], [`ResultExt`]
//! - **Functions**: [`render`], [`render_plain`]

pub use crate::{chained, here};

pub use crate::spec::{Flag, FormatSpec};
pub use crate::types::{render, render_plain, Cause, ChainedError, ChainedResult, ErrorFormatter};

pub use crate::traits::ResultExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ResultSpanExt;
