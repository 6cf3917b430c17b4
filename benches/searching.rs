//! Benchmarks for magic square searching.
//!
//! This file benchmarks individual operations for regression testing:
//! - `generate()`: One candidate draw (shuffle + grid fill)
//! - `magic_constant()`: Full check on a magic square (worst case)
//! - `magic_constant()`: Early-exit check on a non-magic square
//! - `search()`: A complete order-3 search (tens of thousands of attempts)

#![feature(test)]

extern crate test;

use magic_search::{SearchParams, Square, generate, search};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use test::Bencher;

#[bench]
fn bench_generate_n3(b: &mut Bencher) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    b.iter(|| {
        let sq = generate(3, &mut rng);
        test::black_box(sq)
    });
}

#[bench]
fn bench_generate_n10(b: &mut Bencher) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    b.iter(|| {
        let sq = generate(10, &mut rng);
        test::black_box(sq)
    });
}

#[bench]
fn bench_check_magic_square(b: &mut Bencher) {
    // A magic square forces every row, column, and diagonal to be summed.
    let sq = Square::from_rows(&[vec![8, 1, 6], vec![3, 5, 7], vec![4, 9, 2]]);

    b.iter(|| test::black_box(sq.magic_constant()));
}

#[bench]
fn bench_check_non_magic_square(b: &mut Bencher) {
    // Fails on the second row, exercising the early exit.
    let sq = Square::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);

    b.iter(|| test::black_box(sq.magic_constant()));
}

#[bench]
fn bench_search_n3(b: &mut Bencher) {
    let params = SearchParams::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    b.iter(|| {
        let result = search(3, &mut rng, &params);
        test::black_box(result)
    });
}
