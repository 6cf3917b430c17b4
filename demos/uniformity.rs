//! Uniformity check for the candidate generator.
//!
//! A fair shuffle places each of 1..=n² in any fixed cell with equal
//! probability. This draws many candidates, counts which value lands in
//! cell (0, 0), and runs a chi-square test against the exact uniform
//! expectation of samples / n².
//!
//! Usage: cargo run --release --example uniformity -- [n] [samples]

use magic_search::generate;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let samples: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    let num_values = n * n;
    println!("=== Generator Uniformity Test ===");
    println!("n = {}, samples = {}", n, samples);
    println!("expected count per value: {:.1}", samples as f64 / num_values as f64);
    println!();

    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let mut counts = vec![0usize; num_values];
    for _ in 0..samples {
        let sq = generate(n, &mut rng);
        counts[(sq.get(0, 0) - 1) as usize] += 1;
    }

    let expected = samples as f64 / num_values as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let df = num_values - 1;
    let normalized = chi_square / df as f64;

    println!("Results:");
    println!("  Min count: {}", counts.iter().min().unwrap());
    println!("  Max count: {}", counts.iter().max().unwrap());
    println!("  Chi-square: {:.2}", chi_square);
    println!("  Degrees of freedom: {}", df);
    println!("  Normalized (chi^2/df): {:.4}", normalized);
    println!();

    print_result(normalized);
}

fn print_result(normalized: f64) {
    if normalized < 1.2 {
        println!("RESULT: Distribution appears uniform (chi^2/df < 1.2)");
    } else if normalized < 1.5 {
        println!("RESULT: Distribution marginally uniform (1.2 <= chi^2/df < 1.5)");
    } else {
        println!("RESULT: Distribution appears non-uniform (chi^2/df >= 1.5)");
    }
}
