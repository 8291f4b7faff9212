pub use core_2048::*;

pub mod ai;
pub mod config;
pub mod direction;
pub mod game;
pub mod history;
pub mod logic;
pub mod session;
pub mod state;

pub use config::{ChangeDetection, GameConfig};
pub use direction::Direction;
pub use game::Game;
pub use state::GameState;
