use std::fmt;
use std::str::FromStr;

use super::error::GridError;
use super::{Cell, Grid};

/// Tokens read as an empty cell.
const EMPTY_TOKENS: [&str; 4] = ["", ".", "-", "0"];

impl Grid {
    /// Parse a grid from text notation.
    ///
    /// Rows are separated by `/` and cells by `,`. `.`, `-`, `0` or an empty
    /// token mark an empty cell. A row written as a single `.` is all empty.
    ///
    /// # Example
    /// ```
    /// use tile_engine::board::Grid;
    ///
    /// let grid = Grid::try_from_notation("2,2/.,4").unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    /// ```
    pub fn try_from_notation(notation: &str) -> Result<Self, GridError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(GridError::Empty);
        }
        let raw_rows: Vec<&str> = notation.split('/').collect();
        let size = raw_rows.len();

        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(size);
        for (row, raw) in raw_rows.iter().enumerate() {
            let raw = raw.trim();
            if raw == "." && size > 1 {
                rows.push(vec![None; size]);
                continue;
            }
            let cells = raw
                .split(',')
                .map(|token| parse_token(row, token.trim()))
                .collect::<Result<Vec<Cell>, GridError>>()?;
            rows.push(cells);
        }

        Grid::try_from_rows(rows)
    }

    /// Parse a grid from text notation.
    ///
    /// # Panics
    /// Panics if the notation is invalid. Use `try_from_notation` for fallible parsing.
    #[must_use]
    pub fn from_notation(notation: &str) -> Self {
        Self::try_from_notation(notation).expect("Invalid grid notation")
    }

    /// Convert the grid to text notation, writing `.` for empty cells.
    #[must_use]
    pub fn to_notation(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or_else(|| ".".to_string(), |v| v.to_string()))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn parse_token(row: usize, token: &str) -> Result<Cell, GridError> {
    if EMPTY_TOKENS.contains(&token) {
        return Ok(None);
    }
    token
        .parse::<u32>()
        .map(Some)
        .map_err(|_| GridError::InvalidToken {
            row,
            token: token.to_string(),
        })
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::try_from_notation(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 7 + 1);
        writeln!(f, "{rule}")?;
        for row in self.cells.chunks(self.size) {
            for cell in row {
                match cell {
                    Some(value) => write!(f, "| {value:>4} ")?,
                    None => write!(f, "|      ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}
