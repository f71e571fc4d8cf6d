//! Slide and merge tests.

use super::grid;
use crate::board::slide::merge_line;
use crate::board::{Cell, Direction, Grid, MAX_TILE};

fn line(values: &[u32]) -> Vec<Cell> {
    values
        .iter()
        .map(|&v| if v == 0 { None } else { Some(v) })
        .collect()
}

// ============================================================================
// Line merging
// ============================================================================

#[test]
fn merge_pairs_from_the_leading_edge() {
    assert_eq!(merge_line(&line(&[2, 2, 4, 0])), line(&[4, 4, 0, 0]));
}

#[test]
fn merge_skips_gaps() {
    assert_eq!(merge_line(&line(&[4, 0, 4, 4])), line(&[8, 4, 0, 0]));
}

#[test]
fn merged_tile_does_not_merge_again() {
    assert_eq!(merge_line(&line(&[8, 8, 16, 0])), line(&[16, 16, 0, 0]));
    assert_eq!(merge_line(&line(&[2, 2, 4, 4])), line(&[4, 8, 0, 0]));
}

#[test]
fn four_equal_tiles_make_two_pairs() {
    assert_eq!(merge_line(&line(&[2, 2, 2, 2])), line(&[4, 4, 0, 0]));
}

#[test]
fn three_equal_tiles_merge_the_leading_pair() {
    assert_eq!(merge_line(&line(&[2, 2, 2, 0])), line(&[4, 2, 0, 0]));
}

#[test]
fn tiles_merge_up_to_the_largest_value() {
    assert_eq!(merge_line(&line(&[1 << 30, 1 << 30])), line(&[MAX_TILE, 0]));
}

#[test]
fn largest_tiles_do_not_merge() {
    assert_eq!(merge_line(&line(&[MAX_TILE, MAX_TILE])), line(&[MAX_TILE, MAX_TILE]));
}

#[test]
fn empty_line_stays_empty() {
    assert_eq!(merge_line(&line(&[0, 0, 0])), line(&[0, 0, 0]));
}

// ============================================================================
// Grid slides
// ============================================================================

#[test]
fn slide_left_and_right() {
    let g = grid("2,2,4,./.,.,.,./.,.,.,./.,.,.,.");
    assert_eq!(g.slide(Direction::Left), grid("4,4,.,./.,.,.,./.,.,.,./.,.,.,."));
    assert_eq!(g.slide(Direction::Right), grid(".,.,4,4/.,.,.,./.,.,.,./.,.,.,."));
}

#[test]
fn slide_up_and_down() {
    let g = grid("2,.,.,./.,.,.,./2,.,.,./8,.,.,.");
    assert_eq!(g.slide(Direction::Up), grid("4,.,.,./8,.,.,./.,.,.,./.,.,.,."));
    assert_eq!(g.slide(Direction::Down), grid(".,.,.,./.,.,.,./4,.,.,./8,.,.,."));
}

#[test]
fn slide_right_merges_from_the_right_edge() {
    let g = grid("2,2,2/.,.,./.,.,.");
    assert_eq!(g.slide(Direction::Right), grid(".,2,4/.,.,./.,.,."));
    assert_eq!(g.slide(Direction::Left), grid("4,2,./.,.,./.,.,."));
}

#[test]
fn slide_leaves_receiver_unchanged() {
    let g = grid("2,2/4,.");
    let before = g.clone();
    let _ = g.slide(Direction::Left);
    assert_eq!(g, before);
}

#[test]
fn blocked_slide_is_a_no_op() {
    let g = grid("2,4/.,.");
    assert_eq!(g.slide(Direction::Left), g);
    assert_eq!(g.slide(Direction::Up), g);
    assert!(!g.can_slide(Direction::Left));
    assert!(g.can_slide(Direction::Down));
}

#[test]
fn successors_skip_no_op_directions() {
    let g = grid("2,./.,.");
    let dirs: Vec<Direction> = g.successors().map(|(dir, _)| dir).collect();
    assert_eq!(dirs, vec![Direction::Down, Direction::Right]);
}

#[test]
fn full_grid_without_pairs_has_no_successors() {
    assert_eq!(grid("2,4/4,2").successors().count(), 0);
}

#[test]
fn line_reads_in_scan_order() {
    let g = grid("2,4/8,16");
    assert_eq!(g.line(Direction::Left, 0), line(&[2, 4]));
    assert_eq!(g.line(Direction::Right, 0), line(&[4, 2]));
    assert_eq!(g.line(Direction::Up, 1), line(&[4, 16]));
    assert_eq!(g.line(Direction::Down, 1), line(&[16, 4]));
}

#[test]
fn slide_with_largest_tiles_is_a_no_op() {
    let g = Grid::from_rows(vec![vec![Some(MAX_TILE), Some(MAX_TILE)], vec![None, None]]);
    assert_eq!(g.slide(Direction::Left), g);
    assert!(!g.can_slide(Direction::Right));
    assert_eq!(
        g.slide(Direction::Down),
        Grid::from_rows(vec![vec![None, None], vec![Some(MAX_TILE), Some(MAX_TILE)]])
    );
}
