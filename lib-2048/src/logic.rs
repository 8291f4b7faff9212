use log::trace;
use rand::Rng;

use crate::{direction::Direction, Board, Slide, Tile};

/// Where a spawned tile landed and what it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub column: usize,
    pub tile: Tile,
}

/// Places a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell. Does nothing on a full board.
pub fn spawn_tile(rng: &mut impl Rng, board: &mut Board) -> Option<Spawn> {
    let slot_count = board.empty_count();

    if slot_count == 0 {
        return None;
    }

    // One draw picks both the slot and the value: each slot owns ten consecutive outcomes, one of
    // which is a 4.
    let rand = rng.gen_range(0..(slot_count * 10));

    let slot_idx = rand / 10;
    let tile = if rand % 10 == 0 { Tile::FOUR } else { Tile::TWO };

    let (row, column) = board.empty_cells().nth(slot_idx)?;
    board.set_tile(row, column, tile);

    trace!("spawned {} at ({row}, {column})", tile.value());

    Some(Spawn { row, column, tile })
}

/// Slides the whole board in `direction` without spawning, by turning the board so that
/// `direction` faces left, sliding left and turning it back.
pub fn shift(board: &mut Board, direction: Direction) -> Slide {
    let turns = direction.quarter_turns();

    let mut canonical = board.rotated(turns);
    let slide = canonical.slide_left();

    *board = canonical.rotated((4 - turns) % 4);

    slide
}
