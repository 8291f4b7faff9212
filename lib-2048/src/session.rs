use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::{ai::Ai, game::Game, Board};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    /// Moves played that changed the board.
    pub moves: u32,
    pub score: u64,
    pub max_tile: u32,
    pub board: Board,
    /// `true` if the game ended because the player ran out of moves rather than because of the
    /// move cap.
    pub finished: bool,
}

/// Lets `ai` play `game` until it has no move that changes the board or `max_moves` moves were
/// played.
pub fn play_out<R: Rng>(
    game: &mut Game<R>,
    ai: &mut impl Ai<R>,
    max_moves: Option<u32>,
) -> PlaySummary {
    let mut moves = 0u32;

    let finished = loop {
        if max_moves.is_some_and(|max| moves >= max) {
            break false;
        }

        let Some(direction) = ai.get_next_move(game) else {
            break true;
        };

        if !game.apply_move(direction) {
            debug!("{direction:?} left the board unchanged, stopping");
            break true;
        }

        moves += 1;

        if moves % 256 == 0 {
            debug!("{moves} moves, score {}", game.score());
        }
    };

    PlaySummary {
        moves,
        score: game.score(),
        max_tile: game.max_tile(),
        board: *game.board(),
        finished,
    }
}
