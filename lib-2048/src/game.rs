use log::debug;
use rand::Rng;

use crate::{
    config::GameConfig, direction::Direction, history::History, state::GameState, Board,
};

/// A running game: live state, the one-slot undo history and the random source used for spawning.
///
/// Every move takes a checkpoint first, so [`Game::rollback`] can undo exactly the last move. The
/// board is only handed out by shared reference; all mutation goes through the move operations.
pub struct Game<R> {
    pub(crate) state: GameState,
    pub(crate) history: History,
    pub(crate) config: GameConfig,
    pub(crate) rng: R,
}

impl<R: Rng> Game<R> {
    /// Starts a new game with two spawned tiles.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GameConfig::default())
    }

    pub fn with_config(rng: R, config: GameConfig) -> Self {
        let mut game = Self::from_board_with_config(Board::EMPTY, rng, config);
        game.initialize();

        game
    }

    /// Resumes from a prepared board with a score of 0. No tiles are spawned.
    pub fn from_board(board: Board, rng: R) -> Self {
        Self::from_board_with_config(board, rng, GameConfig::default())
    }

    pub fn from_board_with_config(board: Board, rng: R, config: GameConfig) -> Self {
        Self {
            state: GameState::new(board),
            history: History::default(),
            config,
            rng,
        }
    }

    /// Clears board, score, max tile and history, then spawns two tiles.
    pub fn initialize(&mut self) {
        self.state = GameState::default();
        self.history.clear();

        self.state.spawn_tile(&mut self.rng);
        self.state.spawn_tile(&mut self.rng);
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_move(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_move(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.apply_move(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.apply_move(Direction::Down)
    }

    /// Checkpoints, slides the board in `direction` and spawns a tile if anything changed.
    ///
    /// The checkpoint is taken even when the move turns out to be a no-op. Returns whether the
    /// board changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.history.checkpoint(&self.state);

        let slide = self.state.play(direction, &mut self.rng);

        debug!(
            "move {direction:?}: changed={}, gained={}, score={}",
            slide.changed, slide.score, self.state.score
        );

        slide.changed
    }

    /// Restores board and score from the pending checkpoint. Returns `false` if there was nothing
    /// to restore.
    pub fn rollback(&mut self) -> bool {
        let Some(snapshot) = self.history.take() else {
            debug!("rollback with no pending checkpoint");
            return false;
        };

        self.state.board = snapshot.board;
        self.state.score = snapshot.score;

        debug!("rolled back to score {}", snapshot.score);

        true
    }

    pub fn can_rollback(&self) -> bool {
        self.history.is_pending()
    }

    /// Compares the live board with the pending checkpoint, using the configured
    /// [`ChangeDetection`](crate::ChangeDetection). `false` without a checkpoint.
    pub fn has_board_changed(&self) -> bool {
        self.history.peek().is_some_and(|snapshot| {
            self.config
                .change_detection
                .has_changed(&snapshot.board, &self.state.board)
        })
    }

    pub fn can_move(&self) -> bool {
        self.state.board.can_move()
    }

    /// Directions that would change the board, in evaluation order.
    pub fn changing_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().filter(move |&direction| {
            let mut trial = self.state;
            trial.shift(direction).changed
        })
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn max_tile(&self) -> u32 {
        self.state.max_tile
    }

    pub fn empty_tile_count(&self) -> usize {
        self.state.board.empty_count()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
