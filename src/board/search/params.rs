use crate::board::SPAWN_VALUES;

/// Upper bound on the depth the timed search will try.
pub const DEFAULT_MAX_TIMED_DEPTH: u32 = 64;

#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Tile values the opponent turn considers placing.
    pub opponent_tiles: Vec<u32>,
    pub max_timed_depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            opponent_tiles: SPAWN_VALUES.to_vec(),
            max_timed_depth: DEFAULT_MAX_TIMED_DEPTH,
        }
    }
}
