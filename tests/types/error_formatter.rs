use chained_error::{render, ChainedError, ErrorFormatter, Flag, FormatSpec, Formatted};
use std::fmt::{self, Write};

/// Writes back the directive it was asked to render with.
#[derive(Debug)]
struct Echo;

impl fmt::Display for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("echo")
    }
}

impl std::error::Error for Echo {}

impl ErrorFormatter for Echo {
    fn format(&self, out: &mut dyn Write, spec: &FormatSpec) -> fmt::Result {
        write!(out, "<{spec}>")
    }
}

#[test]
fn verbose_forwards_same_directive_to_formatter_cause() {
    let err = ChainedError::msg("m").with_detail("d").with_cause(Echo);

    assert_eq!(render("%+v", &err).unwrap(), "m\n\td\n<%+v>");
    assert_eq!(render("%+-8.2v", &err).unwrap(), "m\n\td\n<%+-8.2v>");
}

#[test]
fn verbose_forwards_through_every_link() {
    let err = ChainedError::msg("a").with_cause(ChainedError::msg("b").with_cause(Echo));
    assert_eq!(render("%+4v", &err).unwrap(), "a\nb\n<%+4v>");
}

#[test]
fn display_forwards_formatter_options_to_formatter_cause() {
    let err = ChainedError::msg("m").with_cause(Echo);

    assert_eq!(format!("{err:+}"), "m\n<%+v>");
    assert_eq!(format!("{err:<+8.3}"), "m\n<%+-8.3v>");
    assert_eq!(format!("{err:+08}"), "m\n<%+-08v>");
    assert_eq!(format!("{err:>+8}"), "m\n<%+8v>");
}

/// Renders a fixed word as a plain string under whatever directive it gets.
#[derive(Debug)]
struct Word;

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boom")
    }
}

impl std::error::Error for Word {}

impl ErrorFormatter for Word {
    fn format(&self, out: &mut dyn Write, spec: &FormatSpec) -> fmt::Result {
        chained_error::write_plain(out, spec, "boom")
    }
}

#[test]
fn display_pads_formatter_and_plain_causes_alike() {
    let formatter = ChainedError::msg("m").with_cause(Word);
    let plain = ChainedError::msg("m").with_source(std::io::Error::other("boom"));

    assert_eq!(format!("{formatter:+6}"), "m\nboom  ");
    assert_eq!(format!("{plain:+6}"), "m\nboom  \n");
    assert_eq!(format!("{formatter:>+6}"), "m\n  boom");
    assert_eq!(format!("{plain:>+6}"), "m\n  boom\n");
}

#[test]
fn compact_uses_cause_display() {
    let err = ChainedError::msg("m").with_cause(Echo);
    assert_eq!(render("%v", &err).unwrap(), "m: echo");
    assert_eq!(err.to_string(), "m: echo");
}

#[test]
fn with_spec_ignores_outer_options() {
    let err = ChainedError::msg("m").with_detail("d");
    let spec = FormatSpec::verbose();

    assert_eq!(format!("{:>20}", err.with_spec(spec)), "m\n\td\n");
    assert_eq!(err.with_spec(FormatSpec::new('q')).to_string(), r#""m""#);
}

#[test]
fn formatted_works_with_trait_objects() {
    let err = ChainedError::msg("m");
    let dynamic: &dyn ErrorFormatter = &err;
    let formatted = Formatted::new(dynamic, FormatSpec::new('s').with_width(3).with_flag(Flag::Minus));

    assert_eq!(formatted.spec().directive(), "%-3s");
    assert_eq!(formatted.to_string(), "m  ");
}

#[test]
fn render_rejects_malformed_directive() {
    assert!(render("v", &ChainedError::msg("m")).is_err());
    assert!(render("%", &ChainedError::msg("m")).is_err());
}
