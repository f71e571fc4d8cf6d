use super::error::GridError;
use super::{is_tile_value, Cell};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Square grid of optional power-of-two tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")
)]
pub struct Grid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from a snapshot of rows, validating shape and tile values.
    pub fn try_from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }
            for (col, cell) in line.into_iter().enumerate() {
                if let Some(value) = cell {
                    if !is_tile_value(value) {
                        return Err(GridError::InvalidValue { row, col, value });
                    }
                }
                cells.push(cell);
            }
        }

        Ok(Grid { size, cells })
    }

    /// Build a grid from a snapshot of rows.
    ///
    /// # Panics
    /// Panics if the snapshot is invalid. Use `try_from_rows` for fallible construction.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self::try_from_rows(rows).expect("Invalid grid snapshot")
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of range for a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        debug_assert!(value.map_or(true, is_tile_value), "invalid tile {value:?}");
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Largest tile on the grid, or `None` if the grid is empty.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Iterate over present tile values in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Positions of empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Row `row` as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.size]
    }

    /// Column `col` copied top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.size).map(|row| self.get(row, col)).collect()
    }

    /// Snapshot of the grid as owned rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Corner positions in row-major order: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [(usize, usize); 4] {
        let last = self.size.saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Grid::try_from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
