//! Search for a magic square with specified order and seed.
//!
//! Usage: cargo run --release --example search -- <n> [seed]
//!
//! Example:
//!   cargo run --release --example search -- 3 42

use magic_search::{SearchParams, search};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <n> [seed]", args[0]);
        std::process::exit(1);
    });

    if n < 3 {
        eprintln!("n must be at least 3");
        std::process::exit(1);
    }

    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    if n > 3 {
        eprintln!("searching... (expected attempts grow explosively beyond order 3)");
    }

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let result = search(n, &mut rng, &SearchParams::default())
        .expect("unbounded search only returns on success");

    print!("{}", result.square());
    println!();
    println!("magic constant: {}", result.constant());
    println!("attempts: {}", result.attempts());
}
