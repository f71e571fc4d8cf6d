//! Tile-merging grid model, heuristics and move search.
//!
//! A `Grid` is an N×N matrix of optional power-of-two tiles. Sliding it in a
//! `Direction` merges equal neighbours once per move and returns a new grid.
//! Heuristics score grids, and the search functions look several moves ahead
//! to pick a direction.
//!
//! # Example
//! ```
//! use tile_engine::board::{find_best_move, Grid, HeuristicKind, SearchState};
//!
//! let grid = Grid::from_notation("2,2,.,./.,4,.,./.,.,.,./.,.,.,.");
//! let mut state = SearchState::default();
//! let best = find_best_move(&grid, &mut state, 2, &HeuristicKind::Clusteredness);
//! println!("best move: {best:?}");
//! ```

mod error;
mod eval;
mod eval_terms;
mod notation;
pub mod prelude;
mod search;
mod slide;
mod spawn;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{DirectionError, GridError, HeuristicError, StrategyError};
pub use eval::{computer_heuristic, Heuristic, HeuristicKind, HeuristicReport};
pub use eval_terms::{clusteredness, monotonicity, monotonicity2, smoothness, smoothness2};
pub use spawn::FOUR_PROBABILITY;
pub use state::Grid;
pub use types::{can_merge, is_tile_value, log_value, Cell, Direction, MAX_TILE, SPAWN_VALUES};

// Public API - search functions and configuration
pub use search::{
    best_first, find_best_move, find_best_move_with_time, maximize_heuristic, minimax,
    nearest_improvement, search, timed_improvement, SearchConfig, SearchParams, SearchResult,
    SearchState, SearchStats, Strategy, DEFAULT_MAX_TIMED_DEPTH,
};

pub(crate) use types::{Axis, ScanOrder};
