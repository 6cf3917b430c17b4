//! Attempt-count statistics over repeated order-3 searches.
//!
//! There are 8 magic squares of order 3 (the Lo Shu square and its
//! rotations and reflections) among the 9! = 362,880 arrangements of 1..=9,
//! so a single search is expected to take 362,880 / 8 = 45,360 attempts.
//! This runs many independent searches and compares the observed mean
//! against that expectation.
//!
//! Usage: cargo run --release --example attempts -- [searches] [seed]

use magic_search::{SearchParams, Searcher};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;
use std::time::Instant;

const EXPECTED_ATTEMPTS: f64 = 362_880.0 / 8.0;

fn main() {
    let args: Vec<String> = env::args().collect();

    let searches: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("=== Order-3 Attempt Count Statistics ===");
    println!("searches = {}, seed = {}", searches, seed);
    println!("expected attempts per search: {}", EXPECTED_ATTEMPTS);
    println!();

    let rng = ChaCha20Rng::seed_from_u64(seed);
    let searcher = Searcher::new(3, rng, SearchParams::default());

    let start = Instant::now();
    let attempts: Vec<u64> = searcher.take(searches).map(|r| r.attempts()).collect();
    let elapsed = start.elapsed();

    let total: u64 = attempts.iter().sum();
    let mean = total as f64 / attempts.len() as f64;
    let min = *attempts.iter().min().unwrap();
    let max = *attempts.iter().max().unwrap();

    println!("Results:");
    println!("  Min attempts: {}", min);
    println!("  Max attempts: {}", max);
    println!("  Mean attempts: {:.1}", mean);
    println!(
        "  Mean / expected: {:.3}",
        mean / EXPECTED_ATTEMPTS
    );
    println!();
    println!(
        "Total: {} candidates in {:.2?} ({:.0} candidates/sec)",
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64()
    );
}
