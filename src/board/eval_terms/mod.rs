//! Individual heuristic terms.
//!
//! Each term is a pure function of a `Grid`. Empty cells read as value 1
//! (log2 = 0) wherever a term compares tiles in the log domain.

mod clusteredness;
mod monotonicity;
mod smoothness;

pub use clusteredness::clusteredness;
pub use monotonicity::{monotonicity, monotonicity2};
pub use smoothness::{smoothness, smoothness2};

use super::{Cell, Grid};

/// Every row, top to bottom.
fn rows(grid: &Grid) -> impl Iterator<Item = Vec<Cell>> + '_ {
    (0..grid.size()).map(move |row| grid.row(row).to_vec())
}

/// Every column, left to right.
fn columns(grid: &Grid) -> impl Iterator<Item = Vec<Cell>> + '_ {
    (0..grid.size()).map(move |col| grid.column(col))
}
