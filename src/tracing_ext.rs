//! Tracing integration for chained errors.
//!
//! Captures the active [`tracing`] span as a chain link and emits finished
//! chains as structured events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! chained-error = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;

use alloc::format;
use alloc::string::String;

use tracing::Span;

use crate::types::ChainedError;

/// Extension trait for `Result` types to record the span an error surfaced in.
pub trait ResultSpanExt<T> {
    /// Wraps the error in a link naming the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use chained_error::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, ChainedError> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, ChainedError>;

    /// Wraps the error in a link naming `span`.
    fn with_span(self, span: &Span) -> Result<T, ChainedError>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn with_current_span(self) -> Result<T, ChainedError> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, ChainedError> {
        self.map_err(|e| span_link(span).with_source(e))
    }
}

/// Wraps `error` in a link naming the current span.
pub fn instrument_error<E>(error: E) -> ChainedError
where
    E: Error + Send + Sync + 'static,
{
    span_link(&Span::current()).with_source(error)
}

/// Builds a link for `span`: `in span '<name>'`, with the span's
/// `file:line` as detail when its metadata records one.
fn span_link(span: &Span) -> ChainedError {
    let Some(metadata) = span.metadata() else {
        return ChainedError::msg("in span 'unknown'");
    };
    let detail = match (metadata.file(), metadata.line()) {
        (Some(file), Some(line)) => format!("{}:{}", file, line),
        _ => String::new(),
    };
    ChainedError::new(format!("in span '{}'", metadata.name()), detail, None)
}

impl ChainedError {
    /// Emits this chain as an `ERROR` event.
    ///
    /// The event carries the compact form in `error` and the verbose report in
    /// `report`.
    pub fn emit(&self) {
        let report = format!("{:+}", self);
        tracing::error!(error = %self, report = %report, links = self.chain().count(), "error chain");
    }
}
