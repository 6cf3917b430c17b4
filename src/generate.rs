//! Random candidate generation.
//!
//! A candidate is a uniformly random arrangement of `1..=n²` in an `n x n`
//! grid, drawn by Fisher-Yates shuffling the ordered sequence and filling
//! the grid row-major. Every one of the `(n²)!` arrangements is equally
//! likely, so repeated draws are independent trials over the full space.

use crate::Square;
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates one random candidate square of order `n`.
///
/// The returned square contains each integer in `1..=n²` exactly once. The
/// shuffle consumes entropy from `rng` and nothing else; pass a seeded RNG
/// for reproducible candidates.
///
/// # Panics
/// Panics if `n < 1` or `n > 255`.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Square {
    assert!((1..=255).contains(&n), "n must be in range 1..=255");
    let mut values: Vec<u32> = (1..=(n * n) as u32).collect();
    values.shuffle(rng);
    Square::from_cells(n, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn contents_are_a_permutation_of_1_to_n_squared() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for n in 1..=12 {
            let sq = generate(n, &mut rng);
            let mut cells = sq.cells().to_vec();
            cells.sort_unstable();
            let expected: Vec<u32> = (1..=(n * n) as u32).collect();
            assert_eq!(cells, expected, "order {} should hold 1..=n² exactly", n);
        }
    }

    #[test]
    fn same_seed_same_candidate() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(42);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(generate(5, &mut rng1), generate(5, &mut rng2));
    }

    #[test]
    fn different_seed_different_candidate_smoke() {
        // Try a few seed pairs
        for offset in 0u64..5 {
            let mut rng1 = ChaCha20Rng::seed_from_u64(offset);
            let sq1 = generate(4, &mut rng1);

            let mut rng2 = ChaCha20Rng::seed_from_u64(offset + 100);
            let sq2 = generate(4, &mut rng2);

            if sq1 != sq2 {
                return; // Success: found different outputs
            }
        }
        panic!("All tested seed pairs produced identical squares (extremely unlikely)");
    }

    #[test]
    fn corner_cell_distribution_is_approximately_uniform() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let samples = 9_000;
        let mut counts = [0usize; 9];

        for _ in 0..samples {
            let sq = generate(3, &mut rng);
            counts[(sq.get(0, 0) - 1) as usize] += 1;
        }

        // Expected 1000 per value; the binomial standard deviation is about
        // 30, so a band of +-200 leaves enormous slack.
        for (value, &count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(&count),
                "value {} landed in (0,0) {} times out of {}",
                value + 1,
                count,
                samples
            );
        }
    }
}
