use chained_error::{Cause, ChainedError};
use std::error::Error;

use super::eof;

#[test]
fn plain_cause_is_not_verbose() {
    let cause = Cause::plain(eof());

    assert!(!cause.supports_verbose());
    assert!(cause.as_formatter().is_none());
    assert_eq!(cause.to_string(), "unexpected EOF");
}

#[test]
fn chained_error_is_verbose_in_either_variant() {
    assert!(Cause::formatter(ChainedError::msg("inner")).supports_verbose());
    assert!(Cause::plain(ChainedError::msg("inner")).supports_verbose());
    assert!(Cause::from(ChainedError::msg("inner")).supports_verbose());
}

#[test]
fn as_error_exposes_concrete_type() {
    let cause = Cause::plain(eof());
    let io = cause.as_error().downcast_ref::<std::io::Error>().unwrap();

    assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn boxed_errors_convert_to_plain_causes() {
    let boxed: Box<dyn Error + Send + Sync> = "boxed failure".into();
    let cause = Cause::from(boxed);

    assert!(matches!(cause, Cause::Plain(_)));
    assert_eq!(cause.into_boxed().to_string(), "boxed failure");
}

#[test]
fn debug_is_transparent() {
    let cause = Cause::formatter(ChainedError::msg("inner"));
    assert_eq!(
        format!("{cause:?}"),
        r#"ChainedError { message: "inner", detail: "", cause: None }"#
    );
}

#[test]
fn wrapped_reports_cause_variant() {
    let err = ChainedError::msg("outer").with_source(eof());
    assert!(matches!(err.wrapped(), Some(Cause::Plain(_))));

    let err = ChainedError::msg("outer").with_cause(ChainedError::msg("inner"));
    assert!(matches!(err.wrapped(), Some(Cause::Formatter(_))));

    assert!(ChainedError::msg("alone").wrapped().is_none());
}
