use criterion::criterion_main;

mod chain;

#[cfg(feature = "serde")]
mod serialization;

#[cfg(feature = "serde")]
criterion_main!(
    formatting::formatting_benches,
    directive::directive_benches,
    chain::chain_benches,
    serialization::serialization_benches,
);

#[cfg(not(feature = "serde"))]
criterion_main!(
    formatting::formatting_benches,
    directive::directive_benches,
    chain::chain_benches,
);
