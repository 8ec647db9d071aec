//! Benchmarks for ISBN validation and conversion.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use isbnkit::{Isbn, compute_isbn13_check_digit, is_valid, to_isbn13};

const SAMPLES: &[&str] = &[
    "978-4-8443-3667-9",
    "9784844336679",
    "978-4-06-277829-9",
    "4-10-109205-2",
    "4101092052",
    "978-4-8443-3667-8",
    "978-4-8443-3667-a",
];

fn bench_is_valid(c: &mut Criterion) {
    c.bench_function("is_valid", |b| {
        b.iter(|| {
            for sample in SAMPLES {
                black_box(is_valid(black_box(sample)));
            }
        });
    });
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("compute_isbn13_check_digit", |b| {
        b.iter(|| compute_isbn13_check_digit(black_box(b"978484433667")).unwrap());
    });
}

fn bench_to_isbn13(c: &mut Criterion) {
    c.bench_function("to_isbn13", |b| {
        b.iter(|| to_isbn13(black_box("4-10-109205-2")).unwrap());
    });
}

fn bench_isbn_of(c: &mut Criterion) {
    c.bench_function("isbn_of_and_classify", |b| {
        b.iter(|| {
            let isbn = Isbn::of(black_box("978-4-06-277829-9")).unwrap();
            black_box(isbn.linguistic_area())
        });
    });
}

criterion_group!(
    benches,
    bench_is_valid,
    bench_check_digit,
    bench_to_isbn13,
    bench_isbn_of
);
criterion_main!(benches);
