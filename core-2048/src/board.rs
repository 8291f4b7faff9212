use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{row, Slide, Tile, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have 4 rows, got {rows}")]
    RowCount { rows: usize },
    #[error("row {row} must have 4 tiles, got {width}")]
    RowWidth { row: usize, width: usize },
    #[error("tile value {value} is neither empty nor a power of two")]
    InvalidTile { value: u32 },
}

/// The 4x4 grid, stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Tile; WIDTH]; WIDTH],
}

impl Board {
    pub const EMPTY: Self = Self {
        rows: [[Tile::EMPTY; WIDTH]; WIDTH],
    };

    /// Builds a board from raw values, rejecting grids of the wrong shape and values that are not
    /// tiles.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != WIDTH {
            return Err(BoardError::RowCount { rows: rows.len() });
        }

        let mut board = Self::EMPTY;

        for (i, values) in rows.iter().enumerate() {
            let values = values.as_ref();

            if values.len() != WIDTH {
                return Err(BoardError::RowWidth {
                    row: i,
                    width: values.len(),
                });
            }

            for (j, &value) in values.iter().enumerate() {
                board.rows[i][j] = Tile::new(value)?;
            }
        }

        Ok(board)
    }

    pub const fn rows(&self) -> &[[Tile; WIDTH]; WIDTH] {
        &self.rows
    }

    pub const fn tile(&self, row: usize, column: usize) -> Tile {
        self.rows[row][column]
    }

    pub fn set_tile(&mut self, row: usize, column: usize, tile: Tile) {
        self.rows[row][column] = tile;
    }

    pub fn values(&self) -> [[u32; WIDTH]; WIDTH] {
        self.rows.map(|row| row.map(Tile::value))
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Positions of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, tile)| tile.is_empty())
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.tiles().filter(|tile| tile.is_empty()).count()
    }

    pub fn tile_sum(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value())).sum()
    }

    pub fn max_value(&self) -> u32 {
        self.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Whether any two horizontally or vertically adjacent tiles hold the same value.
    pub fn has_mergeable_pair(&self) -> bool {
        (0..WIDTH).any(|i| {
            (0..WIDTH).any(|j| {
                let tile = self.rows[i][j];

                (i + 1 < WIDTH && tile.merges_with(self.rows[i + 1][j]))
                    || (j + 1 < WIDTH && tile.merges_with(self.rows[i][j + 1]))
            })
        })
    }

    /// True while some direction can still change the board.
    pub fn can_move(&self) -> bool {
        self.empty_count() > 0 || self.has_mergeable_pair()
    }

    /// One quarter-turn: cell `(i, j)` moves to `(j, WIDTH - 1 - i)`.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let mut rotated = Self::EMPTY;

        for (i, row) in self.rows.iter().enumerate() {
            for (j, &tile) in row.iter().enumerate() {
                rotated.rows[j][WIDTH - 1 - i] = tile;
            }
        }

        rotated
    }

    /// Applies [`Board::rotate`] `turns` times in sequence.
    #[must_use]
    pub fn rotated(&self, turns: usize) -> Self {
        (0..turns).fold(*self, |board, _| board.rotate())
    }

    /// Slides every row towards column 0.
    pub fn slide_left(&mut self) -> Slide {
        self.rows
            .iter_mut()
            .map(|tiles| row::slide(tiles))
            .fold(Slide::default(), Slide::combine)
    }
}

impl TryFrom<[[u32; WIDTH]; WIDTH]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u32; WIDTH]; WIDTH]) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile:>5}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
