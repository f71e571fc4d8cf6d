//! Search module: best-first lookahead and alpha-beta minimax, with
//! iterative-deepening drivers on top.
//!
//! Features:
//! - Best-first depth-limited search over player moves only
//! - Minimax with alpha-beta pruning against a restricted tile-placement opponent
//! - Threshold-driven iterative deepening over the best-first search
//! - Wall-clock-budgeted iterative deepening over minimax
//! - One-ply greedy selection of every best direction

mod best_first;
mod iterative;
mod minimax;
mod params;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::StrategyError;
use super::{Direction, Grid, Heuristic};
pub use best_first::maximize_heuristic;
pub use iterative::{nearest_improvement, timed_improvement};
pub use params::{SearchParams, DEFAULT_MAX_TIMED_DEPTH};

/// Direction chosen by a search call together with its score.
///
/// `direction` is `None` at leaves, on the opponent turn, and when no move
/// is available; only player-turn results carry a playable direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub direction: Option<Direction>,
    pub score: f64,
}

impl SearchResult {
    #[inline]
    #[must_use]
    pub const fn new(direction: Option<Direction>, score: f64) -> Self {
        SearchResult { direction, score }
    }

    /// A result with no direction attached.
    #[inline]
    #[must_use]
    pub const fn leaf(score: f64) -> Self {
        SearchResult {
            direction: None,
            score,
        }
    }

    /// The forced-loss sentinel: no direction, negative infinity.
    #[inline]
    #[must_use]
    pub const fn loss() -> Self {
        Self::leaf(f64::NEG_INFINITY)
    }

    #[inline]
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.score == f64::NEG_INFINITY
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes visited by the most recent search call
    pub nodes: u64,
    /// Nodes visited since the state was created
    pub total_nodes: u64,
    /// Alpha-beta cutoffs in the most recent search call
    pub cutoffs: u64,
    /// Deepest iteration a driver finished
    pub completed_depth: u32,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
        self.completed_depth = 0;
    }

    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
        self.total_nodes += 1;
    }
}

/// Search state carried across calls: tunables plus statistics.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub stats: SearchStats,
    pub params: SearchParams,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchState {
            stats: SearchStats::default(),
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }
}

/// Borrowed heuristic and state for one search call.
pub(crate) struct SearchContext<'a, H: Heuristic + ?Sized> {
    pub heuristic: &'a H,
    pub state: &'a mut SearchState,
}

impl<'a, H: Heuristic + ?Sized> SearchContext<'a, H> {
    pub(crate) fn new(heuristic: &'a H, state: &'a mut SearchState) -> Self {
        SearchContext { heuristic, state }
    }
}

/// Which iterative-deepening driver a search runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Best-first search at growing depth until the score beats the current grid.
    Threshold,
    /// Minimax at growing depth until the time budget is spent.
    #[default]
    Timed,
}

impl Strategy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Threshold => "threshold",
            Strategy::Timed => "timed",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threshold" | "depth" => Ok(Strategy::Threshold),
            "timed" | "time" => Ok(Strategy::Timed),
            _ => Err(StrategyError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for a search operation.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Deepest best-first iteration for the threshold driver
    pub max_depth: u32,
    /// Minimum wall-clock time for the timed driver
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::Timed,
            max_depth: 3,
            time_budget: Duration::from_millis(100),
        }
    }
}

impl SearchConfig {
    /// Create a threshold search config limited to `max_depth`
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            strategy: Strategy::Threshold,
            max_depth,
            ..Default::default()
        }
    }

    /// Create a timed minimax config with the given budget
    #[must_use]
    pub fn time(time_budget: Duration) -> Self {
        SearchConfig {
            strategy: Strategy::Timed,
            time_budget,
            ..Default::default()
        }
    }
}

/// Best-first search from `grid`, `max_depth` player moves deep.
///
/// Returns `(None, h(grid))` at depth 0 and `(None, -inf)` when no direction
/// changes the grid. Ties go to the first direction in `Direction::ALL`.
pub fn best_first<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    max_depth: u32,
    heuristic: &H,
) -> SearchResult {
    state.stats.nodes = 0;
    SearchContext::new(heuristic, state).best_first(grid, max_depth)
}

/// Alpha-beta minimax from `grid` with the player to move.
pub fn minimax<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    max_depth: u32,
    alpha: f64,
    beta: f64,
    heuristic: &H,
) -> SearchResult {
    state.stats.nodes = 0;
    state.stats.cutoffs = 0;
    SearchContext::new(heuristic, state).player_turn(grid, max_depth, alpha, beta)
}

/// Run the driver selected by `config` and return the chosen direction.
pub fn search<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    config: &SearchConfig,
    heuristic: &H,
) -> Option<Direction> {
    match config.strategy {
        Strategy::Threshold => nearest_improvement(grid, state, config.max_depth, heuristic),
        Strategy::Timed => timed_improvement(grid, state, config.time_budget, heuristic),
    }
}

/// Find the best direction with the threshold driver
pub fn find_best_move<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    max_depth: u32,
    heuristic: &H,
) -> Option<Direction> {
    search(grid, state, &SearchConfig::depth(max_depth), heuristic)
}

/// Find the best direction with the timed minimax driver
pub fn find_best_move_with_time<H: Heuristic + ?Sized>(
    grid: &Grid,
    state: &mut SearchState,
    time_budget: Duration,
    heuristic: &H,
) -> Option<Direction> {
    search(grid, state, &SearchConfig::time(time_budget), heuristic)
}
