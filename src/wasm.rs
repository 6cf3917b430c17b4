use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{SearchParams, SearchResult, Square, search};

/// Convert a Square to a JsValue (2D array of u32).
fn square_to_js(sq: &Square) -> Result<JsValue, JsError> {
    let rows: Vec<Vec<u32>> = (0..sq.n())
        .map(|r| (0..sq.n()).map(|c| sq.get(r, c)).collect())
        .collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| JsError::new(&e.to_string()))
}

/// The outcome of a search, exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmSearchResult {
    result: SearchResult,
}

#[wasm_bindgen]
impl WasmSearchResult {
    /// The winning grid as a 2D array.
    pub fn grid(&self) -> Result<JsValue, JsError> {
        square_to_js(self.result.square())
    }

    /// The common row/column/diagonal sum.
    #[wasm_bindgen(getter)]
    pub fn constant(&self) -> u64 {
        self.result.constant()
    }

    /// How many candidates were tried, including the winner.
    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u64 {
        self.result.attempts()
    }
}

/// Search for a magic square of order `n` with the given seed.
///
/// `n` must be at least 3. The search runs until it succeeds, so call this
/// from a worker rather than the main thread, and stick to small orders:
/// order 3 takes tens of thousands of attempts on average, order 4 billions.
#[wasm_bindgen]
pub fn search_magic(n: u8, seed: u64) -> Result<WasmSearchResult, JsError> {
    if n < 3 {
        return Err(JsError::new("n must be at least 3"));
    }
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let result = search(n as usize, &mut rng, &SearchParams::default())
        .expect("unbounded search only returns on success");
    Ok(WasmSearchResult { result })
}
