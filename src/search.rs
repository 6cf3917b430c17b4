use crate::Square;
use crate::generate::generate;
use rand::Rng;

/// Parameters for the generate-and-test search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Maximum number of candidates to try before giving up.
    ///
    /// `None` means the search runs until it succeeds, which is the intended
    /// behavior: a non-magic candidate is a normal outcome that drives the
    /// next iteration, not a failure. The expected number of attempts grows
    /// combinatorially with `n` (about 45,360 for order 3, about 3 × 10⁹ for
    /// order 4), so a cap is mostly useful for tests and bounded experiments.
    pub max_attempts: Option<u64>,
}

/// The outcome of one successful search: the winning square, its magic
/// constant, and the number of candidates tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    square: Square,
    constant: u64,
    attempts: u64,
}

impl SearchResult {
    /// Returns the magic square that ended the search.
    pub fn square(&self) -> &Square {
        &self.square
    }

    /// Returns the common row/column/diagonal sum of the winning square.
    pub fn constant(&self) -> u64 {
        self.constant
    }

    /// Returns how many candidates were generated, including the winner.
    /// Always at least 1.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Consumes the result, returning the winning square.
    pub fn into_square(self) -> Square {
        self.square
    }
}

/// Searches for a magic square of order `n` by repeated random trials.
///
/// Each attempt draws an independent uniformly random arrangement of
/// `1..=n²` and tests it; the first magic candidate is returned along with
/// its constant and the attempt count. With the default parameters the
/// search never gives up, so `None` is only possible when
/// [`SearchParams::max_attempts`] is set and exhausted.
///
/// The search is a plain synchronous computation. Callers that need to stay
/// responsive while it runs should move it to another thread and send the
/// result back themselves; the function holds no shared state, so concurrent
/// searches are independent.
///
/// # Example
///
/// ```
/// use magic_search::{SearchParams, search};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(0);
/// let result = search(3, &mut rng, &SearchParams::default()).unwrap();
///
/// assert!(result.square().is_magic());
/// assert_eq!(result.constant(), 15);
/// assert!(result.attempts() >= 1);
/// ```
///
/// # Panics
/// Panics if `n < 1` or `n > 255`.
pub fn search<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    params: &SearchParams,
) -> Option<SearchResult> {
    assert!((1..=255).contains(&n), "n must be in range 1..=255");

    let mut attempts = 0u64;
    loop {
        if let Some(limit) = params.max_attempts
            && attempts >= limit
        {
            return None;
        }
        attempts += 1;

        let square = generate(n, rng);
        if let Some(constant) = square.magic_constant() {
            return Some(SearchResult {
                square,
                constant,
                attempts,
            });
        }
    }
}

/// An iterator that runs one full search per `next()`, yielding independent
/// magic squares of order `n`.
///
/// With the default parameters this is an infinite iterator; it ends only
/// when a capped search exhausts its attempt budget.
///
/// # Example
///
/// ```
/// use magic_search::{SearchParams, Searcher};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let searcher = Searcher::new(3, rng, SearchParams::default());
///
/// for result in searcher.take(2) {
///     assert_eq!(result.constant(), 15);
/// }
/// ```
pub struct Searcher<R> {
    n: usize,
    rng: R,
    params: SearchParams,
}

impl<R: Rng> Searcher<R> {
    /// Create a new searcher for magic squares of order `n`.
    ///
    /// # Panics
    /// Panics if `n < 1` or `n > 255`.
    pub fn new(n: usize, rng: R, params: SearchParams) -> Self {
        assert!((1..=255).contains(&n), "n must be in range 1..=255");
        Self { n, rng, params }
    }
}

impl<R: Rng> Iterator for Searcher<R> {
    type Item = SearchResult;

    fn next(&mut self) -> Option<Self::Item> {
        search(self.n, &mut self.rng, &self.params)
    }
}
