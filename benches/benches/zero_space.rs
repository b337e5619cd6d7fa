use criterion::{criterion_group, criterion_main, Criterion};
use hangul_splitting::HangulSplitter;

mod group;

group!(
    "./../test_data/texts",
    zero_space,
    test_decompose,
    test_compose,
    "zero_space",
    HangulSplitter::new_zero_space()
);

criterion_group!(benches, zero_space);
criterion_main!(benches);
