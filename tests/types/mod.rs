use chained_error::{Cause, ChainedError};
use std::io;

mod cause;
mod error_formatter;

/// The three-link chain used across the formatting tests.
pub fn nested() -> ChainedError {
    ChainedError::msg(r#"reading "file""#)
        .with_detail("cmd/prog/reader.go:122")
        .with_cause(
            ChainedError::msg("parsing line 23")
                .with_detail("iff x > 3 {\n\tcmd/prog/parser.go:85")
                .with_cause(ChainedError::msg("syntax error").with_detail("cmd/prog/parser.go:214")),
        )
}

pub fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected EOF")
}

#[test]
fn new_accepts_every_part() {
    let err = ChainedError::new("m", "d", Some(Cause::plain(eof())));

    assert_eq!(err.message(), "m");
    assert_eq!(err.detail(), "d");
    assert!(err.has_detail());
    assert_eq!(err.cause().map(|c| c.to_string()), Some("unexpected EOF".to_string()));
}

#[test]
fn new_accepts_empty_message() {
    let err = ChainedError::new("", "", None);

    assert_eq!(err.to_string(), "");
    assert_eq!(format!("{err:+}"), "\n");
}

#[test]
fn into_parts_returns_fields() {
    let (message, detail, cause) = ChainedError::msg("m").with_detail("d").into_parts();

    assert_eq!(message, "m");
    assert_eq!(detail, "d");
    assert!(cause.is_none());
}

#[test]
fn compact_string_joins_every_message() {
    assert_eq!(nested().compact_string(), r#"reading "file": parsing line 23: syntax error"#);
    assert_eq!(ChainedError::msg("m").compact_string(), "m");
    assert_eq!(ChainedError::msg("m").with_source(eof()).compact_string(), "m: unexpected EOF");
}

#[test]
fn compact_string_ignores_detail() {
    let err = ChainedError::msg("m").with_detail("d\ne");
    assert_eq!(err.compact_string(), "m");
}
