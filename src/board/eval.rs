//! Heuristic selection and grid scoring.
//!
//! Search entry points take any `Heuristic`: a plain `Fn(&Grid) -> f64`,
//! a `HeuristicKind`, or a user type implementing the trait.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::HeuristicError;
use super::eval_terms::{clusteredness, monotonicity, monotonicity2, smoothness, smoothness2};
use super::Grid;

/// A scoring function over grids. Higher is better for the player.
pub trait Heuristic {
    fn evaluate(&self, grid: &Grid) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Grid) -> f64,
{
    #[inline]
    fn evaluate(&self, grid: &Grid) -> f64 {
        self(grid)
    }
}

/// The built-in heuristics, selectable by name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    Monotonicity,
    Monotonicity2,
    Smoothness,
    Smoothness2,
    #[default]
    Clusteredness,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::Monotonicity,
        HeuristicKind::Monotonicity2,
        HeuristicKind::Smoothness,
        HeuristicKind::Smoothness2,
        HeuristicKind::Clusteredness,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Monotonicity => "monotonicity",
            HeuristicKind::Monotonicity2 => "monotonicity2",
            HeuristicKind::Smoothness => "smoothness",
            HeuristicKind::Smoothness2 => "smoothness2",
            HeuristicKind::Clusteredness => "clusteredness",
        }
    }

    /// The term as a plain function pointer.
    #[must_use]
    pub fn as_fn(self) -> fn(&Grid) -> f64 {
        match self {
            HeuristicKind::Monotonicity => monotonicity,
            HeuristicKind::Monotonicity2 => monotonicity2,
            HeuristicKind::Smoothness => smoothness,
            HeuristicKind::Smoothness2 => smoothness2,
            HeuristicKind::Clusteredness => clusteredness,
        }
    }
}

impl Heuristic for HeuristicKind {
    #[inline]
    fn evaluate(&self, grid: &Grid) -> f64 {
        (self.as_fn())(grid)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = HeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| HeuristicError::Unknown {
                name: s.to_string(),
            })
    }
}

/// How badly a tile placement disrupts the player: the total log-distance
/// between neighbouring tiles. The opponent turn keeps the placements that
/// maximize it.
#[inline]
#[must_use]
pub fn computer_heuristic(grid: &Grid) -> f64 {
    -smoothness2(grid)
}

impl Grid {
    /// No empty cell and no mergeable pair: every direction is a no-op.
    #[must_use]
    pub fn is_forced_loss(&self) -> bool {
        self.empty_count() == 0 && smoothness(self) == 0.0
    }
}

/// Every heuristic evaluated on one grid, for status output.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicReport {
    pub empty_cells: usize,
    pub max_value: Option<u32>,
    pub monotonicity: f64,
    pub monotonicity2: f64,
    pub smoothness: f64,
    pub smoothness2: f64,
    pub clusteredness: f64,
}

impl HeuristicReport {
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        HeuristicReport {
            empty_cells: grid.empty_count(),
            max_value: grid.max_value(),
            monotonicity: monotonicity(grid),
            monotonicity2: monotonicity2(grid),
            smoothness: smoothness(grid),
            smoothness2: smoothness2(grid),
            clusteredness: clusteredness(grid),
        }
    }

    /// `(label, value)` pairs in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Empty cells", self.empty_cells.to_string()),
            (
                "Max",
                self.max_value.map_or_else(|| "-".to_string(), |v| v.to_string()),
            ),
            ("Monotonicity", format!("{:.4}", self.monotonicity)),
            ("Monotonicity2", format!("{:.4}", self.monotonicity2)),
            ("Smoothness", format!("{}", self.smoothness)),
            ("Smoothness2", format!("{:.4}", self.smoothness2)),
            ("Clusteredness", format!("{}", self.clusteredness)),
        ]
    }
}

impl fmt::Display for HeuristicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
