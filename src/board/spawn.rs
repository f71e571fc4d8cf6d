//! Random tile placement, standing in for the game's own spawner.

use rand::Rng;

use super::Grid;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

impl Grid {
    /// Place a random tile on a uniformly chosen empty cell.
    ///
    /// Returns the placement as `(row, col, value)`, or `None` if the grid is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize, u32)> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(FOUR_PROBABILITY) { 4 } else { 2 };
        self.set(row, col, Some(value));
        Some((row, col, value))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::board::Grid;

    #[test]
    fn spawn_fills_an_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::from_notation("2,4/.,8");
        let (row, col, value) = grid.spawn_random_tile(&mut rng).expect("one cell is empty");
        assert_eq!((row, col), (1, 0));
        assert!(value == 2 || value == 4);
        assert_eq!(grid.empty_count(), 0);
    }

    #[test]
    fn spawn_on_full_grid_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::from_notation("2,4/4,2");
        assert!(grid.spawn_random_tile(&mut rng).is_none());
        assert_eq!(grid, Grid::from_notation("2,4/4,2"));
    }
}
