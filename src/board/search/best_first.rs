use super::{SearchContext, SearchResult};
use crate::board::{Direction, Grid, Heuristic};

impl<H: Heuristic + ?Sized> SearchContext<'_, H> {
    /// Depth-limited search over player moves alone; no tiles are spawned.
    pub(crate) fn best_first(&mut self, grid: &Grid, depth: u32) -> SearchResult {
        self.state.stats.visit();

        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(grid));
        }

        let mut best: Option<SearchResult> = None;
        for (direction, next) in grid.successors() {
            let score = self.best_first(&next, depth - 1).score;
            // Strict comparison: the earliest direction keeps a tie.
            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult::new(Some(direction), score));
            }
        }

        best.unwrap_or_else(SearchResult::loss)
    }
}

/// Every direction whose immediate successor scores highest, in search order.
///
/// Directions that leave the grid unchanged are skipped, so the result is
/// empty only when no move is possible.
pub fn maximize_heuristic<H: Heuristic + ?Sized>(grid: &Grid, heuristic: &H) -> Vec<Direction> {
    let mut best_value = f64::NEG_INFINITY;
    let mut result = Vec::new();

    for (direction, next) in grid.successors() {
        let value = heuristic.evaluate(&next);
        if value > best_value {
            best_value = value;
            result.clear();
            result.push(direction);
        } else if value == best_value {
            result.push(direction);
        }
    }

    result
}
