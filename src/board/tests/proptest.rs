//! Property-based tests using proptest.

use crate::board::{
    best_first, computer_heuristic, minimax, Cell, Direction, Grid, Heuristic, HeuristicKind,
    SearchState, SPAWN_VALUES,
};
use proptest::prelude::*;

/// Strategy for one cell: empty or a tile from 2 to 32
fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(None), (1u32..=5).prop_map(|exp| Some(1u32 << exp))]
}

/// Strategy for an arbitrary square grid between 2x2 and `max_size`
fn grid_strategy(max_size: usize) -> impl Strategy<Value = Grid> {
    (2..=max_size).prop_flat_map(|size| {
        prop::collection::vec(cell_strategy(), size * size).prop_map(move |cells| {
            Grid::from_rows(cells.chunks(size).map(<[Cell]>::to_vec).collect())
        })
    })
}

fn heuristic_strategy() -> impl Strategy<Value = HeuristicKind> {
    prop::sample::select(HeuristicKind::ALL.to_vec())
}

/// Strategy to generate a random seed for tile spawns
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn tile_sum(grid: &Grid) -> u64 {
    grid.tiles().map(u64::from).sum()
}

/// Opponent placements maximizing the disruption score, without pruning.
fn disruptive_children(grid: &Grid) -> Vec<Grid> {
    let mut scored = Vec::new();
    for value in SPAWN_VALUES {
        for (row, col) in grid.empty_cells() {
            let mut child = grid.clone();
            child.set(row, col, Some(value));
            scored.push((computer_heuristic(&child), child));
        }
    }
    let best = scored
        .iter()
        .map(|(score, _)| *score)
        .fold(f64::NEG_INFINITY, f64::max);
    scored
        .into_iter()
        .filter(|(score, _)| *score == best)
        .map(|(_, child)| child)
        .collect()
}

fn exhaustive_player(grid: &Grid, depth: u32, heuristic: &HeuristicKind) -> f64 {
    if depth == 0 {
        return heuristic.evaluate(grid);
    }
    if grid.is_forced_loss() {
        return f64::NEG_INFINITY;
    }
    grid.successors()
        .map(|(_, next)| exhaustive_opponent(&next, depth - 1, heuristic))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn exhaustive_opponent(grid: &Grid, depth: u32, heuristic: &HeuristicKind) -> f64 {
    let children = disruptive_children(grid);
    if children.is_empty() {
        return exhaustive_player(grid, depth, heuristic);
    }
    children
        .iter()
        .map(|child| exhaustive_player(child, depth, heuristic))
        .fold(f64::INFINITY, f64::min)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: sliding never creates or destroys tile value
    #[test]
    fn prop_slide_conserves_tile_sum(grid in grid_strategy(5)) {
        for dir in Direction::ALL {
            let next = grid.slide(dir);
            prop_assert_eq!(tile_sum(&next), tile_sum(&grid));
            prop_assert!(next.empty_count() >= grid.empty_count());
        }
    }

    /// Property: after a slide left every row is packed against the left edge
    #[test]
    fn prop_slide_packs_tiles(grid in grid_strategy(5)) {
        let next = grid.slide(Direction::Left);
        for row in 0..next.size() {
            let line = next.row(row);
            let tiles = line.iter().take_while(|cell| cell.is_some()).count();
            prop_assert!(line[tiles..].iter().all(Option::is_none));
        }
    }

    /// Property: successors are exactly the directions that change the grid
    #[test]
    fn prop_successors_change_the_grid(grid in grid_strategy(4)) {
        let dirs: Vec<Direction> = grid.successors().map(|(dir, _)| dir).collect();
        for dir in Direction::ALL {
            prop_assert_eq!(dirs.contains(&dir), grid.slide(dir) != grid);
        }
    }

    /// Property: with any tile on the grid, forced loss holds exactly when no
    /// successor exists
    #[test]
    fn prop_forced_loss_matches_successors(grid in grid_strategy(4)) {
        prop_assume!(grid.max_value().is_some());
        prop_assert_eq!(grid.is_forced_loss(), grid.successors().next().is_none());
    }

    /// Property: searches never pick a direction that leaves the grid unchanged
    #[test]
    fn prop_search_excludes_no_ops(grid in grid_strategy(3), heuristic in heuristic_strategy()) {
        let mut state = SearchState::default();
        if let Some(dir) = best_first(&grid, &mut state, 2, &heuristic).direction {
            prop_assert!(grid.can_slide(dir));
        }
        let result = minimax(&grid, &mut state, 1, f64::NEG_INFINITY, f64::INFINITY, &heuristic);
        if let Some(dir) = result.direction {
            prop_assert!(grid.can_slide(dir));
        }
    }

    /// Property: alpha-beta pruning does not change the root value
    #[test]
    fn prop_minimax_matches_exhaustive_search(
        grid in grid_strategy(3),
        depth in 0u32..=2,
        heuristic in heuristic_strategy(),
    ) {
        let mut state = SearchState::default();
        let pruned = minimax(&grid, &mut state, depth, f64::NEG_INFINITY, f64::INFINITY, &heuristic);
        prop_assert_eq!(pruned.score, exhaustive_player(&grid, depth, &heuristic));
    }

    /// Property: random play keeps every grid a valid snapshot
    #[test]
    fn prop_random_play_keeps_grid_valid(seed in seed_strategy(), num_moves in 1..=40usize) {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(4);
        grid.spawn_random_tile(&mut rng);
        grid.spawn_random_tile(&mut rng);

        for _ in 0..num_moves {
            let moves: Vec<(Direction, Grid)> = grid.successors().collect();
            if moves.is_empty() {
                break;
            }
            let (_, next) = moves[rng.gen_range(0..moves.len())].clone();
            let before = tile_sum(&next);
            grid = next;
            let spawned = grid.spawn_random_tile(&mut rng);
            prop_assert!(spawned.is_some(), "a changing slide leaves an empty cell");
            prop_assert!(Grid::try_from_rows(grid.to_rows()).is_ok());
            let (_, _, value) = spawned.unwrap();
            prop_assert_eq!(tile_sum(&grid), before + u64::from(value));
        }
    }
}
