use std::cmp::Ordering;

use super::{columns, rows};
use crate::board::{log_value, Cell, Grid};

/// Similarity between the grid and an ideal log-gradient falling away from
/// its strongest corner.
///
/// The corner holding the largest corner tile anchors a plane whose height
/// is `log2(max tile)` at the corner and drops by one per grid step. Each
/// cell contributes `1 / (|expected - log2(cell)| + 1)`, so a perfect match
/// scores 1 per cell. Returns 0 when every corner is empty.
#[must_use]
pub fn monotonicity(grid: &Grid) -> f64 {
    let mut anchor: Option<((usize, usize), u32)> = None;
    for (row, col) in grid.corners() {
        if let Some(value) = grid.get(row, col) {
            // Strict comparison keeps the first corner in row-major order on ties.
            if anchor.map_or(true, |(_, best)| value > best) {
                anchor = Some(((row, col), value));
            }
        }
    }
    let Some(((corner_row, corner_col), _)) = anchor else {
        return 0.0;
    };
    let Some(max_value) = grid.max_value() else {
        return 0.0;
    };
    let ideal = f64::from(max_value).log2();

    let size = grid.size();
    let mut total = 0.0;
    for row in 0..size {
        for col in 0..size {
            let distance = (row.abs_diff(corner_row) + col.abs_diff(corner_col)) as f64;
            let expected = (ideal - distance).max(0.0);
            let actual = log_value(grid.get(row, col));
            total += 1.0 / ((expected - actual).abs() + 1.0);
        }
    }
    total
}

/// Log-difference totals of adjacent pairs, bucketed by how the pair compares.
///
/// Equal pairs always differ by 0, so they need no bucket of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct OrderBuckets {
    decreasing: f64,
    increasing: f64,
}

impl OrderBuckets {
    fn accumulate(&mut self, line: &[Cell]) {
        for pair in line.windows(2) {
            let first = pair[0].unwrap_or(1);
            let second = pair[1].unwrap_or(1);
            let diff = (log_value(pair[0]) - log_value(pair[1])).abs();
            match first.cmp(&second) {
                Ordering::Greater => self.decreasing += diff,
                Ordering::Equal => {}
                Ordering::Less => self.increasing += diff,
            }
        }
    }

    fn imbalance(&self) -> f64 {
        (self.decreasing - self.increasing).abs()
    }
}

/// Directional consistency of value ordering along rows and columns.
///
/// For each axis, sums the absolute log-difference of adjacent pairs that
/// decrease and of those that increase; the score is how lopsided the two
/// totals are, summed over both axes.
#[must_use]
pub fn monotonicity2(grid: &Grid) -> f64 {
    let mut horizontal = OrderBuckets::default();
    for line in rows(grid) {
        horizontal.accumulate(&line);
    }

    let mut vertical = OrderBuckets::default();
    for line in columns(grid) {
        vertical.accumulate(&line);
    }

    horizontal.imbalance() + vertical.imbalance()
}
