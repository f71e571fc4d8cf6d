//! Cell contents and tile value helpers.

/// Contents of one grid position: `None` when empty, otherwise a tile value.
pub type Cell = Option<u32>;

/// Tile values the opponent may place, in the order they are tried.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Largest tile a `u32` cell can hold. Two of them cannot merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Returns true for values a tile may legally hold (a power of two, at least 2).
#[inline]
#[must_use]
pub const fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Returns true if two neighbouring tiles combine when slid together.
#[inline]
#[must_use]
pub const fn can_merge(first: u32, second: u32) -> bool {
    first == second && first < MAX_TILE
}

/// Base-2 logarithm of a cell, reading an empty cell as 1 (so the result is 0).
#[inline]
#[must_use]
pub fn log_value(cell: Cell) -> f64 {
    cell.map_or(0.0, |value| f64::from(value).log2())
}
