pub mod board;
pub mod row;
pub mod tile;

pub use board::{Board, BoardError};
pub use row::Slide;
pub use tile::Tile;

/// Side length of the square board.
pub const WIDTH: usize = 4;
