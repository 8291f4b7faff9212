use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BoardError;

/// A single cell of the board. A value of `0` is an empty cell, anything else is a power of two
/// between 2 and [`Tile::MAX_VALUE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(u32);

impl Tile {
    pub const EMPTY: Self = Self(0);
    pub const TWO: Self = Self(2);
    pub const FOUR: Self = Self(4);

    /// Largest value a tile may hold. Tiles at this value never merge, since their sum would not
    /// fit in a `u32`.
    pub const MAX_VALUE: u32 = 1 << 31;

    pub fn new(value: u32) -> Result<Self, BoardError> {
        if value == 0 || (value >= 2 && value.is_power_of_two()) {
            Ok(Self(value))
        } else {
            Err(BoardError::InvalidTile { value })
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `other` would combine with this tile.
    pub const fn merges_with(self, other: Self) -> bool {
        self.0 != 0 && self.0 == other.0 && self.0 < Self::MAX_VALUE
    }

    /// The tile produced when this tile absorbs an equal neighbour. Only valid when
    /// [`Tile::merges_with`] holds.
    pub(crate) const fn doubled(self) -> Self {
        Self(self.0 << 1)
    }
}

impl TryFrom<u32> for Tile {
    type Error = BoardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.pad(".")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}
