use std::cmp::Ordering;

use log::{debug, trace};
use rand::Rng;

use crate::{direction::Direction, game::Game};

pub mod random;

/// A player that chooses the next move of a game.
pub trait Ai<R> {
    /// `None` when the player has no move that changes the board.
    fn get_next_move(&mut self, game: &mut Game<R>) -> Option<Direction>;
}

/// Picks the move leaving the most empty cells, then the highest score.
#[derive(Clone, Copy, Debug, Default)]
pub struct EfficiencyAi;

impl<R: Rng> Ai<R> for EfficiencyAi {
    fn get_next_move(&mut self, game: &mut Game<R>) -> Option<Direction> {
        let efficiencies = game.evaluate_moves();

        best_move(
            efficiencies
                .into_iter()
                .filter(|efficiency| efficiency.empty_tiles.is_some()),
        )
    }
}

/// What a single move would leave behind, used to rank candidate moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEfficiency {
    pub direction: Direction,
    /// Empty cells after the move, or `None` if the move did not change the board. `None` ranks
    /// below every real count.
    pub empty_tiles: Option<usize>,
    pub score: u64,
}

impl MoveEfficiency {
    pub const fn new(direction: Direction, empty_tiles: usize, score: u64) -> Self {
        Self {
            direction,
            empty_tiles: Some(empty_tiles),
            score,
        }
    }

    pub const fn unchanged(direction: Direction) -> Self {
        Self {
            direction,
            empty_tiles: None,
            score: 0,
        }
    }

    /// Orders by empty cells, then by score. The direction plays no part.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        (self.empty_tiles, self.score).cmp(&(other.empty_tiles, other.score))
    }
}

/// The highest-ranked candidate. Ties go to the earliest candidate.
pub fn best_move(efficiencies: impl IntoIterator<Item = MoveEfficiency>) -> Option<Direction> {
    efficiencies
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.cmp_rank(&best).is_gt() {
                candidate
            } else {
                best
            }
        })
        .map(|efficiency| efficiency.direction)
}

impl<R: Rng> Game<R> {
    /// Plays `direction` on a copy of the current state, spawn included, and measures the result.
    ///
    /// The live board, score, max tile and history are left alone; only the random source
    /// advances.
    pub fn move_efficiency(&mut self, direction: Direction) -> MoveEfficiency {
        let mut trial = self.state;
        trial.play(direction, &mut self.rng);

        let efficiency = if self
            .config
            .change_detection
            .has_changed(&self.state.board, &trial.board)
        {
            MoveEfficiency::new(direction, trial.board.empty_count(), trial.score)
        } else {
            MoveEfficiency::unchanged(direction)
        };

        trace!("{efficiency:?}");

        efficiency
    }

    pub fn evaluate_moves(&mut self) -> [MoveEfficiency; 4] {
        Direction::ALL.map(|direction| self.move_efficiency(direction))
    }

    /// Evaluates all four moves, then plays the best one for real. Returns the chosen direction.
    pub fn auto_move(&mut self) -> Option<Direction> {
        let efficiencies = self.evaluate_moves();
        let direction = best_move(efficiencies)?;

        debug!("auto move picked {direction:?}");
        self.apply_move(direction);

        Some(direction)
    }
}
