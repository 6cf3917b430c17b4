#![doc = include_str!("../README.md")]

mod generate;
mod search;
mod square;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use generate::generate;
pub use search::{SearchParams, SearchResult, Searcher, search};
pub use square::Square;
