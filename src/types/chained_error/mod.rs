//! The chained, detail-carrying error value.
//!
//! A [`ChainedError`] holds a one-line `message`, an optional multi-line
//! `detail` (a source location, a snippet) and an optional wrapped [`Cause`].
//! It renders in two shapes:
//!
//! - compact (`{}`, `%v`, `%s`, ...): every link's message joined with `": "`
//!   on a single line, without a trailing newline;
//! - verbose (`{:+}`, `%+v`): one block per link, the message on its own line
//!   followed by the tab-indented detail, ending with the innermost cause.

use core::error::Error;
use core::fmt::{self, Write};

use alloc::string::String;

use crate::chain::{Chain, LinkVec};
use crate::spec::{write_plain, FormatSpec};
use crate::types::{Cause, ErrorFormatter};

#[cfg(feature = "serde")]
mod serialize;
mod traits;

/// Error value with a message, optional detail and an optional cause.
///
/// Values are immutable once built; the builder methods consume `self` and
/// are meant for construction only.
///
/// # Examples
///
/// ```
/// use chained_error::ChainedError;
///
/// let err = ChainedError::msg(r#"reading "file""#)
///     .with_detail("cmd/prog/reader.go:122")
///     .with_cause(
///         ChainedError::msg("parsing line 23")
///             .with_detail("iff x > 3 {\n\tcmd/prog/parser.go:85")
///             .with_cause(ChainedError::msg("syntax error").with_detail("cmd/prog/parser.go:214")),
///     );
///
/// assert_eq!(err.to_string(), r#"reading "file": parsing line 23: syntax error"#);
/// assert_eq!(
///     format!("{err:+}"),
///     "reading \"file\"\n\tcmd/prog/reader.go:122\n\
///      parsing line 23\n\tiff x > 3 {\n\tcmd/prog/parser.go:85\n\
///      syntax error\n\tcmd/prog/parser.go:214\n"
/// );
/// ```
#[must_use]
pub struct ChainedError {
    message: String,
    detail: String,
    cause: Option<Cause>,
}

impl ChainedError {
    /// Creates an error from all three parts. Nothing is validated.
    #[inline]
    pub fn new(message: impl Into<String>, detail: impl Into<String>, cause: Option<Cause>) -> Self {
        Self { message: message.into(), detail: detail.into(), cause }
    }

    /// Creates a single-link error without detail.
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message, String::new(), None)
    }

    #[inline]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Wraps `source`, rendered through its `Display` string.
    ///
    /// A `ChainedError` passed here still renders verbosely.
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Cause::plain(source));
        self
    }

    /// Wraps a cause that takes part in verbose rendering.
    #[inline]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: ErrorFormatter + Send + Sync + 'static,
    {
        self.cause = Some(Cause::formatter(cause));
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[inline]
    pub fn has_detail(&self) -> bool {
        !self.detail.is_empty()
    }

    /// Returns the wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }

    /// Returns the wrapped cause with its rendering capability.
    #[inline]
    pub fn wrapped(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Splits the error into message, detail and cause.
    #[inline]
    pub fn into_parts(self) -> (String, String, Option<Cause>) {
        (self.message, self.detail, self.cause)
    }

    /// `message`, or `message: <cause>` where the cause uses its own `Display`.
    #[must_use]
    pub fn compact_string(&self) -> String {
        match &self.cause {
            None => self.message.clone(),
            Some(cause) => {
                let mut out = String::with_capacity(self.message.len() + 32);
                out.push_str(&self.message);
                out.push_str(": ");
                let _ = write!(out, "{}", cause);
                out
            },
        }
    }

    /// Iterates this error followed by every ancestor reachable through `source()`.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Collects [`chain`](Self::chain).
    pub fn links(&self) -> LinkVec<'_> {
        self.chain().collect()
    }

    /// Returns the innermost error of the chain, which may be `self`.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        crate::chain::root_cause(self)
    }

    fn write_head(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(&self.message)?;
        out.write_char('\n')?;
        if !self.detail.is_empty() {
            out.write_char('\t')?;
            out.write_str(&self.detail)?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl ErrorFormatter for ChainedError {
    fn format(&self, out: &mut dyn Write, spec: &FormatSpec) -> fmt::Result {
        if spec.is_debug_dump() {
            return write!(out, "{:?}", self);
        }
        if !spec.is_verbose() {
            return write_plain(out, spec, &self.compact_string());
        }

        self.write_head(out)?;
        let Some(cause) = &self.cause else {
            return Ok(());
        };
        match cause.as_formatter() {
            Some(inner) => inner.format(out, spec),
            None => {
                let mut plain = String::new();
                write!(plain, "{}", cause)?;
                write_plain(out, spec, &plain)?;
                out.write_char('\n')
            },
        }
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
