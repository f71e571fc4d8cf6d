pub mod board;
pub mod protocol;

pub use board::{Direction, Grid, Heuristic, HeuristicKind};
