//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use tile_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_move, find_best_move_with_time, search, Direction, Grid, GridError, Heuristic,
    HeuristicKind, SearchConfig, SearchResult, SearchState,
};
