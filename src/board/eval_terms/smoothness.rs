use super::{columns, rows};
use crate::board::{can_merge, log_value, Axis, Grid};

/// Number of tile pairs that could merge, ignoring gaps between tiles.
///
/// Rows and columns are scanned in both orders (rows first, then columns
/// first); within one scan a tile credited to a merge is not credited again.
/// The larger of the two scan totals is returned.
#[must_use]
pub fn smoothness(grid: &Grid) -> f64 {
    let rows_first = count_merges(grid, [Axis::Rows, Axis::Columns]);
    let columns_first = count_merges(grid, [Axis::Columns, Axis::Rows]);
    rows_first.max(columns_first) as f64
}

fn count_merges(grid: &Grid, order: [Axis; 2]) -> usize {
    let size = grid.size();
    let mut credited = vec![false; size * size];
    let mut count = 0;

    for axis in order {
        for line in 0..size {
            // Offsets of the line's tiles, with empty cells squeezed out.
            let tiles: Vec<(usize, u32)> = (0..size)
                .filter_map(|step| {
                    let (row, col) = match axis {
                        Axis::Rows => (line, step),
                        Axis::Columns => (step, line),
                    };
                    grid.get(row, col).map(|value| (row * size + col, value))
                })
                .collect();

            for pair in tiles.windows(2) {
                let (first, first_value) = pair[0];
                let (second, second_value) = pair[1];
                if can_merge(first_value, second_value) && !credited[first] && !credited[second] {
                    credited[first] = true;
                    credited[second] = true;
                    count += 1;
                }
            }
        }
    }

    count
}

/// Negated total log-distance between neighbouring tiles.
///
/// Pairs are taken from each row and column with empty cells removed.
/// Zero is perfectly smooth; larger discontinuities make it more negative.
#[must_use]
pub fn smoothness2(grid: &Grid) -> f64 {
    let mut total = 0.0;
    for line in rows(grid).chain(columns(grid)) {
        let tiles: Vec<_> = line.into_iter().flatten().collect();
        for pair in tiles.windows(2) {
            total -= (log_value(Some(pair[0])) - log_value(Some(pair[1]))).abs();
        }
    }
    total
}
