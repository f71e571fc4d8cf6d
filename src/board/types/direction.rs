//! Slide directions and their traversal table.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::DirectionError;

/// A player move. Declaration order is the search order and decides ties.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

/// Which family of lines a direction slides along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Axis {
    /// Lines are rows; tiles travel horizontally.
    Rows,
    /// Lines are columns; tiles travel vertically.
    Columns,
}

/// Order in which a line is read, starting from the edge tiles travel toward.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ScanOrder {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Traversal {
    pub(crate) axis: Axis,
    pub(crate) order: ScanOrder,
}

/// Indexed by `Direction::index`.
const TRAVERSALS: [Traversal; 4] = [
    Traversal {
        axis: Axis::Columns,
        order: ScanOrder::Forward,
    },
    Traversal {
        axis: Axis::Rows,
        order: ScanOrder::Forward,
    },
    Traversal {
        axis: Axis::Columns,
        order: ScanOrder::Reverse,
    },
    Traversal {
        axis: Axis::Rows,
        order: ScanOrder::Reverse,
    },
];

impl Direction {
    /// All directions in search order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    #[inline]
    pub(crate) const fn traversal(self) -> Traversal {
        TRAVERSALS[self.index()]
    }

    /// Lowercase name used by the text front-end.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }

    /// Format an optional direction, printing `none` for no move.
    #[must_use]
    pub fn format_optional(direction: Option<Direction>) -> &'static str {
        direction.map_or("none", Direction::name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "left" | "l" => Ok(Direction::Left),
            "down" | "d" => Ok(Direction::Down),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(DirectionError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}
