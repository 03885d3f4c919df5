//! Error types and the formatter contract.
//!
//! # Examples
//!
//! ```
//! use chained_error::{render, ChainedError};
//!
//! let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "unexpected EOF");
//! let err = ChainedError::msg("m").with_detail("d").with_source(eof);
//!
//! assert_eq!(err.to_string(), "m: unexpected EOF");
//! assert_eq!(render("%+v", &err).unwrap(), "m\n\td\nunexpected EOF\n");
//! ```

pub mod cause;
pub mod chained_error;
pub mod error_formatter;

pub use cause::*;
pub use chained_error::*;
pub use error_formatter::*;

/// Result alias failing with a [`ChainedError`].
pub type ChainedResult<T> = Result<T, ChainedError>;

/// Result alias with a boxed [`ChainedError`] for a smaller stack footprint.
pub type BoxedChainedResult<T> = Result<T, alloc::boxed::Box<ChainedError>>;
