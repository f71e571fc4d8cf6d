//! Core grid types.
//!
//! - `Cell` - optional tile value at one position
//! - `Direction` - the four slide moves, plus the static traversal table

mod cell;
mod direction;

pub use cell::{can_merge, is_tile_value, log_value, Cell, MAX_TILE, SPAWN_VALUES};
pub use direction::Direction;

pub(crate) use direction::{Axis, ScanOrder};
