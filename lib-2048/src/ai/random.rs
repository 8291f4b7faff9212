use log::debug;
use rand::Rng;

use crate::{direction::Direction, game::Game};

use super::Ai;

pub fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

/// Picks uniformly among the moves that change the board, drawing from its own generator.
pub struct RandomAi<G> {
    rng: G,
}

impl<G, R> Ai<R> for RandomAi<G>
where
    G: Rng,
    R: Rng,
{
    fn get_next_move(&mut self, game: &mut Game<R>) -> Option<Direction> {
        let moves: Vec<_> = game.changing_moves().collect();

        (!moves.is_empty()).then(|| moves[self.rng.gen_range(0..moves.len())])
    }
}

impl<G> RandomAi<G>
where
    G: Rng,
{
    pub const fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Game<R> {
    /// Plays a uniformly random direction, whether or not it changes the board.
    pub fn random_move(&mut self) -> Direction {
        let direction = random_direction(&mut self.rng);

        debug!("random move picked {direction:?}");
        self.apply_move(direction);

        direction
    }
}
