use crate::{Board, GameState};

/// Board and score as they stood before a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: u64,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board,
            score: state.score,
        }
    }
}

/// A single pending snapshot. Taking a new checkpoint replaces whatever was pending.
#[derive(Clone, Copy, Debug, Default)]
pub struct History {
    pending: Option<Snapshot>,
}

impl History {
    pub fn checkpoint(&mut self, state: &GameState) {
        self.pending = Some(state.into());
    }

    pub const fn peek(&self) -> Option<&Snapshot> {
        self.pending.as_ref()
    }

    pub fn take(&mut self) -> Option<Snapshot> {
        self.pending.take()
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
