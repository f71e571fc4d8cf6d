use crate::board::Grid;

/// Sum of squared tile values.
///
/// Merging two tiles of value `v` raises the score by `2v²`, so the term
/// rewards both a sparse grid and large tiles.
#[must_use]
pub fn clusteredness(grid: &Grid) -> f64 {
    grid.tiles()
        .map(|value| {
            let value = f64::from(value);
            value * value
        })
        .sum()
}
