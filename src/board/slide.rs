//! Slide-and-merge move simulation.

use super::{can_merge, Axis, Cell, Direction, Grid, ScanOrder};

/// Compact `line` toward its start, merging each equal adjacent pair once.
/// Tiles already at `MAX_TILE` stay as they are.
///
/// The input is read in scan order (first element is the edge tiles travel
/// toward). Returns a fresh line of the same length, padded with empties.
pub(crate) fn merge_line(line: &[Cell]) -> Vec<Cell> {
    let mut merged: Vec<Cell> = Vec::with_capacity(line.len());
    // Whether the last placed tile was produced by a merge during this move.
    let mut last_merged = false;

    for value in line.iter().flatten().copied() {
        match merged.last_mut() {
            Some(Some(prev)) if can_merge(*prev, value) && !last_merged => {
                *prev = value * 2;
                last_merged = true;
            }
            _ => {
                merged.push(Some(value));
                last_merged = false;
            }
        }
    }

    merged.resize(line.len(), None);
    merged
}

impl Grid {
    /// Grid positions of line `index` for `direction`, in scan order.
    pub(crate) fn line_positions(
        &self,
        direction: Direction,
        index: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let traversal = direction.traversal();
        let size = self.size;
        (0..size).map(move |step| {
            let k = match traversal.order {
                ScanOrder::Forward => step,
                ScanOrder::Reverse => size - 1 - step,
            };
            match traversal.axis {
                Axis::Rows => (index, k),
                Axis::Columns => (k, index),
            }
        })
    }

    /// Line `index` for `direction`, read in scan order.
    #[must_use]
    pub fn line(&self, direction: Direction, index: usize) -> Vec<Cell> {
        self.line_positions(direction, index)
            .map(|(row, col)| self.get(row, col))
            .collect()
    }

    /// Result of sliding every tile toward `direction`'s edge.
    ///
    /// The receiver is left untouched. A result equal to `self` means the
    /// move changes nothing and should not be played or searched.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Grid {
        let mut next = Grid::new(self.size);
        for index in 0..self.size {
            let merged = merge_line(&self.line(direction, index));
            for ((row, col), cell) in self.line_positions(direction, index).zip(merged) {
                next.cells[row * self.size + col] = cell;
            }
        }
        next
    }

    /// Returns true if sliding toward `direction` changes the grid.
    #[must_use]
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.slide(direction) != *self
    }

    /// Successor grids for every direction that changes the grid, in search order.
    pub fn successors(&self) -> impl Iterator<Item = (Direction, Grid)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            let next = self.slide(direction);
            (next != *self).then_some((direction, next))
        })
    }
}
