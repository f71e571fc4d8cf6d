//! Alpha-beta minimax against a restricted tile-placement opponent.
//!
//! The opponent does not enumerate every placement with its probability.
//! It scores each (empty cell, tile value) pair with `computer_heuristic`
//! and only explores the placements sharing the highest score.

use super::{SearchContext, SearchResult};
use crate::board::{computer_heuristic, Grid, Heuristic};

/// A hypothetical tile the opponent could place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

impl<H: Heuristic + ?Sized> SearchContext<'_, H> {
    /// Maximizing turn. Consumes one unit of depth per move.
    pub(crate) fn player_turn(
        &mut self,
        grid: &Grid,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> SearchResult {
        self.state.stats.visit();

        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(grid));
        }
        // A dead grid inside the horizon is terminal whatever depth remains.
        if grid.is_forced_loss() {
            return SearchResult::loss();
        }

        let mut best = SearchResult::leaf(alpha);
        for (direction, next) in grid.successors() {
            let score = self.opponent_turn(&next, depth - 1, best.score, beta).score;
            if score > best.score {
                if score > beta {
                    self.state.stats.cutoffs += 1;
                    return SearchResult::new(Some(direction), beta);
                }
                best = SearchResult::new(Some(direction), score);
            }
        }

        best
    }

    /// Minimizing turn. Placing a tile does not consume depth.
    pub(crate) fn opponent_turn(
        &mut self,
        grid: &Grid,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> SearchResult {
        self.state.stats.visit();

        let placements = self.most_disruptive_placements(grid);
        if placements.is_empty() {
            // Nowhere to place a tile: the player simply moves again.
            return self.player_turn(grid, depth, alpha, beta);
        }

        let mut worst = beta;
        for placement in placements {
            let mut child = grid.clone();
            child.set(placement.row, placement.col, Some(placement.value));

            let score = self.player_turn(&child, depth, alpha, worst).score;
            if score < worst {
                if score < alpha {
                    self.state.stats.cutoffs += 1;
                    return SearchResult::leaf(alpha);
                }
                worst = score;
            }
        }

        SearchResult::leaf(worst)
    }

    /// All placements whose disruption score equals the maximum, in
    /// tile-value then row-major order. Ties are all kept.
    pub(crate) fn most_disruptive_placements(&self, grid: &Grid) -> Vec<Placement> {
        let empty = grid.empty_cells();
        let mut probe = grid.clone();
        let mut scored = Vec::with_capacity(empty.len() * self.state.params.opponent_tiles.len());

        for &value in &self.state.params.opponent_tiles {
            for &(row, col) in &empty {
                probe.set(row, col, Some(value));
                scored.push((Placement { row, col, value }, computer_heuristic(&probe)));
                probe.set(row, col, None);
            }
        }

        let max_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        scored
            .into_iter()
            .filter(|(_, score)| *score == max_score)
            .map(|(placement, _)| placement)
            .collect()
    }
}
