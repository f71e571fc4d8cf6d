use std::time::{Duration, Instant};

use log::debug;

use super::{SearchContext, SearchResult, SearchState};
use crate::board::{Direction, Grid, Heuristic};

/// Iterative deepening over best-first search, stopping at the first depth
/// whose score beats the heuristic value of `grid` itself.
///
/// When no depth improves on the current grid, returns the direction of the
/// best non-improving result, which is `None` if no move exists.
pub fn nearest_improvement<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    max_depth: u32,
    heuristic: &H,
) -> Option<Direction> {
    state.stats.reset_search();
    let threshold = heuristic.evaluate(grid);
    let mut best_non_improvement = SearchResult::loss();

    let mut ctx = SearchContext::new(heuristic, state);
    for depth in 1..=max_depth {
        let result = ctx.best_first(grid, depth);
        ctx.state.stats.completed_depth = depth;
        debug!(
            "best-first depth {depth} score {} threshold {threshold} move {} nodes {}",
            result.score,
            Direction::format_optional(result.direction),
            ctx.state.stats.nodes
        );

        if result.score > threshold {
            return result.direction;
        }
        if result.score > best_non_improvement.score {
            best_non_improvement = result;
        }
    }

    debug!("no improvement found within depth {max_depth}");
    best_non_improvement.direction
}

/// Iterative deepening over minimax until `budget` has elapsed.
///
/// The clock is only checked between depths, so the last iteration may run
/// past the budget. A forced loss at any depth ends the search with `None`.
pub fn timed_improvement<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    budget: Duration,
    heuristic: &H,
) -> Option<Direction> {
    state.stats.reset_search();
    let start = Instant::now();
    let max_depth = state.params.max_timed_depth;
    let mut best = SearchResult::loss();

    let mut ctx = SearchContext::new(heuristic, state);
    for depth in 1..=max_depth {
        if start.elapsed() >= budget {
            break;
        }

        let result = ctx.player_turn(grid, depth, f64::NEG_INFINITY, f64::INFINITY);
        if result.is_loss() {
            debug!("minimax depth {depth}: forced loss, no move");
            return None;
        }

        ctx.state.stats.completed_depth = depth;
        debug!(
            "minimax depth {depth} score {} move {} nodes {} elapsed {:?}",
            result.score,
            Direction::format_optional(result.direction),
            ctx.state.stats.nodes,
            start.elapsed()
        );
        best = result;
    }

    let elapsed = start.elapsed();
    debug!(
        "timed search done at depth {} after {elapsed:?} (overrun {:?})",
        state.stats.completed_depth,
        elapsed.saturating_sub(budget)
    );
    best.direction
}
