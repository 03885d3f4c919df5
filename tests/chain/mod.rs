use chained_error::{chain, ChainedError};
use std::{error::Error, fmt, io};

#[derive(Debug)]
struct Unrelated;

impl fmt::Display for Unrelated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrelated")
    }
}

impl Error for Unrelated {}

fn sample() -> ChainedError {
    ChainedError::msg("loading config").with_cause(
        ChainedError::msg("reading file")
            .with_source(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
    )
}

#[test]
fn chain_visits_every_link_in_order() {
    let err = sample();
    let messages: Vec<String> = err.chain().map(|link| link.to_string()).collect();

    assert_eq!(messages, vec!["loading config: reading file: denied", "reading file: denied", "denied"]);
}

#[test]
fn links_collects_chain() {
    let err = sample();
    assert_eq!(err.links().len(), 3);
    assert_eq!(ChainedError::msg("alone").links().len(), 1);
}

#[test]
fn contains_and_find_search_by_type() {
    let err = sample();

    assert!(chain::contains::<io::Error>(&err));
    assert!(chain::contains::<ChainedError>(&err));
    assert!(!chain::contains::<Unrelated>(&err));

    let io = chain::find::<io::Error>(&err).unwrap();
    assert_eq!(io.kind(), io::ErrorKind::PermissionDenied);

    let first = chain::find::<ChainedError>(&err).unwrap();
    assert_eq!(first.message(), "loading config");
}

#[test]
fn root_cause_is_innermost_link() {
    assert_eq!(sample().root_cause().to_string(), "denied");

    let alone = ChainedError::msg("alone");
    assert_eq!(alone.root_cause().to_string(), "alone");
}

#[test]
fn source_matches_cause() {
    let err = sample();
    let source = err.source().unwrap();

    assert_eq!(source.to_string(), err.cause().unwrap().to_string());
    assert!(source.downcast_ref::<ChainedError>().is_some());
}

#[test]
fn chain_works_on_foreign_errors() {
    let io = io::Error::other("plain");
    assert_eq!(chain::chain(&io).count(), 1);
}
