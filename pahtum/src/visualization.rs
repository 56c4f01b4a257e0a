use crate::{Board, Cell, Player};

/// The glyph used for a cell in [`visualize_board()`].
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::BlackHole => '■',
        Cell::Stone(Player::One) => '○',
        Cell::Stone(Player::Two) => '●',
    }
}

/// Draws the board as a box of glyphs with row and column numbers.
pub fn visualize_board(board: &Board) -> String {
    // Draw the top of the box
    let mut result = String::from("    ");
    for j in 0..board.size() {
        result += &format!(" {}", j % 10);
    }
    result += "\n   ╭";
    for _ in 0..board.size() {
        result += "──";
    }
    result += "─╮";

    for (i, row) in board.rows().enumerate() {
        result += &format!("\n{:>2} │", i);
        for &cell in row {
            result.push(' ');
            result.push(cell_glyph(cell));
        }
        result += " │";
    }

    // Draw the bottom of the box
    result += "\n   ╰";
    for _ in 0..board.size() {
        result += "──";
    }
    result += "─╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
