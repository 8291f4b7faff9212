use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    direction::Direction,
    logic::{self, Spawn},
    Board, Slide,
};

/// Board, score and the largest value seen so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: u64,
    pub max_tile: u32,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            max_tile: board.max_value(),
        }
    }

    /// Slides the board and books the merge score. No tile is spawned.
    pub fn shift(&mut self, direction: Direction) -> Slide {
        let slide = logic::shift(&mut self.board, direction);

        self.score += slide.score;
        self.max_tile = self.max_tile.max(slide.max_merged);

        slide
    }

    pub fn spawn_tile(&mut self, rng: &mut impl Rng) -> Option<Spawn> {
        let spawn = logic::spawn_tile(rng, &mut self.board)?;
        self.max_tile = self.max_tile.max(spawn.tile.value());

        Some(spawn)
    }

    /// A complete move: shift, then spawn if anything changed.
    pub fn play(&mut self, direction: Direction, rng: &mut impl Rng) -> Slide {
        let slide = self.shift(direction);

        if slide.changed {
            self.spawn_tile(rng);
        }

        slide
    }
}
