use serde::{Deserialize, Serialize};

use crate::Board;

/// How the engine decides whether a move changed the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDetection {
    /// Compare the sum of all tile values. Two layouts with equal sums count as unchanged.
    #[default]
    TileSum,
    /// Compare cell by cell.
    Layout,
}

impl ChangeDetection {
    pub fn has_changed(self, before: &Board, after: &Board) -> bool {
        match self {
            Self::TileSum => before.tile_sum() != after.tile_sum(),
            Self::Layout => before != after,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub change_detection: ChangeDetection,
}
