//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `slide.rs` - Line merging and grid slides
//! - `eval.rs` - Heuristic terms and forced-loss detection
//! - `search.rs` - Best-first, minimax and the iterative drivers
//! - `notation.rs` - Grid notation parsing and printing
//! - `proptest.rs` - Property-based tests

mod proptest;
mod slide;

use crate::board::Grid;

fn grid(notation: &str) -> Grid {
    notation.parse().expect("valid grid notation")
}
