//! Extension traits for building chains from ordinary `Result`s.
//!
//! - [`ResultExt`]: wrap the error of any `Result` into a [`ChainedError`](crate::ChainedError)
//!
//! # Examples
//!
//! ```
//! use chained_error::traits::ResultExt;
//! use chained_error::render;
//! use std::io;
//!
//! let result: Result<(), io::Error> = Err(io::Error::other("unexpected EOF"));
//! let err = result.wrap_err_detail("reading header", "src/header.rs:40").unwrap_err();
//!
//! assert_eq!(render("%+v", &err).unwrap(), "reading header\n\tsrc/header.rs:40\nunexpected EOF\n");
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
