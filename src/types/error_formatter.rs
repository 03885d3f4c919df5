//! The directive-driven formatter contract.

use core::error::Error;
use core::fmt::{self, Display, Write};

use alloc::string::{String, ToString};

use crate::spec::{write_plain, DirectiveError, Flag, FormatSpec};

/// An error that renders itself under an explicit [`FormatSpec`].
///
/// This is the capability a [`ChainedError`](crate::ChainedError) looks for in
/// its cause when producing a verbose report: causes that implement it are
/// handed the same directive and contribute their own multi-line block,
/// everything else is rendered through its plain `Display` string.
///
/// # Examples
///
/// ```
/// use chained_error::{render, ChainedError, ErrorFormatter, FormatSpec};
///
/// let err = ChainedError::msg("m").with_detail("d");
/// assert_eq!(render("%+v", &err).unwrap(), "m\n\td\n");
/// assert_eq!(err.with_spec(FormatSpec::new('s').with_width(3)).to_string(), "  m");
/// ```
pub trait ErrorFormatter: Error {
    /// Writes this error to `out` under `spec`.
    fn format(&self, out: &mut dyn Write, spec: &FormatSpec) -> fmt::Result;

    /// Renders through a live `Formatter`, as used by a parent's `{:+}` output.
    ///
    /// The default captures the formatter's options with
    /// [`FormatSpec::from_formatter`] and calls [`format`](Self::format).
    /// A width without explicit alignment gains `-`, so the output is
    /// left-aligned like a string padded by `Formatter::pad`.
    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut spec = FormatSpec::from_formatter(f, 'v');
        if f.width().is_some() && f.align().is_none() {
            spec.flags.insert(Flag::Minus);
        }
        self.format(f, &spec)
    }

    /// Pairs this error with `spec` for use with `format!` and friends.
    #[inline]
    fn with_spec(&self, spec: FormatSpec) -> Formatted<'_, Self>
    where
        Self: Sized,
    {
        Formatted::new(self, spec)
    }
}

/// [`Display`] adapter rendering an [`ErrorFormatter`] under a fixed directive.
///
/// The outer formatter's own options are ignored; only `spec` applies.
pub struct Formatted<'a, E: ?Sized> {
    error: &'a E,
    spec: FormatSpec,
}

impl<'a, E: ErrorFormatter + ?Sized> Formatted<'a, E> {
    #[inline]
    pub fn new(error: &'a E, spec: FormatSpec) -> Self {
        Self { error, spec }
    }

    #[inline]
    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }
}

impl<E: ErrorFormatter + ?Sized> Display for Formatted<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.format(f, &self.spec)
    }
}

/// Parses `directive` and renders `error` under it.
///
/// # Examples
///
/// ```
/// use chained_error::{render, ChainedError};
///
/// let err = ChainedError::msg("reading config").with_source(std::fmt::Error);
/// assert_eq!(render("%v", &err).unwrap(), "reading config: an error occurred when formatting an argument");
/// assert_eq!(render("%.7s", &err).unwrap(), "reading");
/// ```
pub fn render<E: ErrorFormatter + ?Sized>(directive: &str, error: &E) -> Result<String, DirectiveError> {
    let spec = FormatSpec::parse(directive)?;
    let mut out = String::new();
    let _ = error.format(&mut out, &spec);
    Ok(out)
}

/// Parses `directive` and applies it to the plain string form of `value`.
///
/// This is how any value without the [`ErrorFormatter`] capability renders,
/// including when it is the cause inside a verbose chain report.
///
/// # Examples
///
/// ```
/// use chained_error::render_plain;
///
/// assert_eq!(render_plain("%+v", &"x").unwrap(), "x");
/// assert_eq!(render_plain("%X", &"m").unwrap(), "6D");
/// ```
pub fn render_plain(directive: &str, value: &dyn Display) -> Result<String, DirectiveError> {
    let spec = FormatSpec::parse(directive)?;
    let mut out = String::new();
    let _ = write_plain(&mut out, &spec, &value.to_string());
    Ok(out)
}
