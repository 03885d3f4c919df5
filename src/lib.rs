//! Chained, detail-carrying errors with compact and verbose rendering.
//!
//! A [`ChainedError`] is one link of an error chain: a short message, an
//! optional multi-line detail and an optional cause. The same value renders as
//! a single colon-joined line or as a multi-line report that keeps every
//! link's detail, either through `core::fmt` (`{}` / `{:+}` / `{:#}`) or
//! through an explicit printf-style [`FormatSpec`] (`%v` / `%+v` / `%#v`).
//!
//! # Examples
//!
//! ## Compact and Verbose
//!
//! ```
//! use chained_error::ChainedError;
//!
//! let err = ChainedError::msg("reading \"file\"")
//!     .with_detail("cmd/prog/reader.go:122")
//!     .with_cause(ChainedError::msg("syntax error"));
//!
//! assert_eq!(err.to_string(), "reading \"file\": syntax error");
//! assert_eq!(format!("{err:+}"), "reading \"file\"\n\tcmd/prog/reader.go:122\nsyntax error\n");
//! ```
//!
//! ## Explicit Directives
//!
//! ```
//! use chained_error::{render, ChainedError, FormatSpec};
//!
//! let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "unexpected EOF");
//! let err = ChainedError::msg("m").with_source(eof);
//!
//! assert_eq!(render("%+15v", &err).unwrap(), "m\n unexpected EOF\n");
//! assert_eq!(FormatSpec::parse("%0+5.2x").unwrap().to_string(), "%+05.2x");
//! ```
//!
//! ## Chain Walking
//!
//! ```
//! use chained_error::{chain, ChainedError};
//!
//! let err = ChainedError::msg("outer").with_source(std::fmt::Error);
//! assert!(chain::contains::<std::fmt::Error>(&err));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Walking an error and its ancestors
pub mod chain;
/// Call-site capturing macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Format directives and plain-string conversion
pub mod spec;
/// Extension traits for `Result`
pub mod traits;
/// ChainedError, its cause and the formatter contract
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use spec::{write_plain, DirectiveError, Flag, Flags, FormatSpec};
pub use traits::*;
pub use types::{
    render, render_plain, BoxedChainedResult, Cause, ChainedError, ChainedResult, ErrorFormatter,
    Formatted,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
