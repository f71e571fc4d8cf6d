//! Error types for grid construction and name parsing.

use std::fmt;

/// Error type for grid snapshot and notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Snapshot has no rows
    Empty,
    /// A row length differs from the number of rows
    NotSquare { row: usize, len: usize, size: usize },
    /// A tile value is not a power of two of at least 2
    InvalidValue { row: usize, col: usize, value: u32 },
    /// A notation token could not be read as a tile
    InvalidToken { row: usize, token: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "Grid snapshot has no rows"),
            GridError::NotSquare { row, len, size } => {
                write!(f, "Row {row} has {len} cells, expected {size}")
            }
            GridError::InvalidValue { row, col, value } => {
                write!(
                    f,
                    "Invalid tile value {value} at ({row}, {col}), expected a power of two >= 2"
                )
            }
            GridError::InvalidToken { row, token } => {
                write!(f, "Invalid token '{token}' in row {row}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Error type for direction name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// Name is not one of up, left, down, right
    Unknown { name: String },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionError::Unknown { name } => {
                write!(f, "Unknown direction '{name}', expected up, left, down or right")
            }
        }
    }
}

impl std::error::Error for DirectionError {}

/// Error type for heuristic name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeuristicError {
    /// Name does not match any known heuristic
    Unknown { name: String },
}

impl fmt::Display for HeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicError::Unknown { name } => write!(f, "Unknown heuristic '{name}'"),
        }
    }
}

impl std::error::Error for HeuristicError {}

/// Error type for search strategy name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Name is not one of threshold, timed or their aliases
    Unknown { name: String },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Unknown { name } => {
                write!(f, "Unknown strategy '{name}', expected threshold or timed")
            }
        }
    }
}

impl std::error::Error for StrategyError {}
