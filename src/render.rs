use std::io::{self, Write};

use lib_2048::{Board, Tile};

const TOP_ROW: &[u8] = "┏━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━┓\n".as_bytes();
const SEPARATOR_ROW: &[u8] = "┣━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━┫\n".as_bytes();
const BOTTOM_ROW: &[u8] = "┗━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━┛\n".as_bytes();
const EMPTY_CELL: &[u8] = "┃       ".as_bytes();
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

fn draw_tile(out: &mut impl Write, tile: Tile, colour: bool) -> io::Result<()> {
    if tile.is_empty() {
        return out.write_all(EMPTY_CELL);
    }

    let num = tile.value();

    if colour {
        // Exponent 1 (a 2) takes the first colour.
        let exponent = num.trailing_zeros() as usize;
        let colour = COLOUR_TABLE[(exponent - 1) % COLOUR_TABLE.len()];

        write!(out, "┃\x1b[7m\x1b[{colour}m{num:^7}\x1b[m")
    } else {
        write!(out, "┃{num:^7}")
    }
}

/// Draws the final grid in box-drawing characters. `colour` adds ANSI colours per tile value.
pub fn draw_board(
    out: &mut impl Write,
    board: &Board,
    score: u64,
    colour: bool,
) -> io::Result<()> {
    writeln!(out, "Score: {score}")?;
    out.write_all(TOP_ROW)?;

    for (i, row) in board.rows().iter().enumerate() {
        if i != 0 {
            out.write_all(SEPARATOR_ROW)?;
        }

        for &tile in row {
            draw_tile(out, tile, colour)?;
        }

        out.write_all("┃\n".as_bytes())?;
    }

    out.write_all(BOTTOM_ROW)?;
    out.flush()
}
