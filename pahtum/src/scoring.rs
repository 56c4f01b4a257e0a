use serde::{Deserialize, Serialize};

use crate::{Board, Cell, Player};

/// Number of consecutive stones that make up a line.
pub const LINE_LENGTH: usize = 4;

/// Points awarded for a number of lines, as `(minimum lines, points)` pairs.
///
/// Sorted by descending threshold. Fewer lines than the last threshold earn nothing.
pub const SCORE_TABLE: [(usize, u32); 5] = [(7, 119), (6, 56), (5, 25), (4, 10), (3, 3)];

/// Looks up the points for a number of lines in [`SCORE_TABLE`].
pub fn points_for_lines(num_lines: usize) -> u32 {
    SCORE_TABLE
        .iter()
        .find(|&&(min_lines, _)| num_lines >= min_lines)
        .map_or(0, |&(_, points)| points)
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// The player with strictly more points wins, anything else is a draw.
    pub fn from_points(points_1: u32, points_2: u32) -> Self {
        match points_1.cmp(&points_2) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// The end-of-game banner.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins!", player.number()),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// The lines of one player and the points they are worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub lines: usize,
    pub points: u32,
}

impl Board {
    /// Counts the horizontal and vertical lines of the player.
    ///
    /// Every window of [`LINE_LENGTH`] cells along a row or column that consists
    /// only of the player's stones is one line. Windows overlap, so five stones
    /// in a row are two lines. Diagonals don't count.
    ///
    /// ```
    /// use pahtum::{Board, Cell, Player};
    ///
    /// let mut rows = vec![vec![Cell::Empty; 7]; 7];
    /// rows[2][1..6].fill(Cell::Stone(Player::Two));
    /// let board = Board::from_rows(&rows);
    /// assert_eq!(board.count_lines(Player::Two), 2);
    /// assert_eq!(board.count_lines(Player::One), 0);
    /// ```
    pub fn count_lines(&self, player: Player) -> usize {
        let horizontal: usize = self.rows().map(|row| lines_in(row, player)).sum();
        let vertical: usize = (0..self.size())
            .map(|col| lines_in(&self.column(col).collect::<Vec<_>>(), player))
            .sum();
        horizontal + vertical
    }

    /// The points of the player, according to [`SCORE_TABLE`].
    pub fn evaluate(&self, player: Player) -> u32 {
        points_for_lines(self.count_lines(player))
    }

    pub fn score(&self, player: Player) -> Score {
        let lines = self.count_lines(player);
        Score {
            lines,
            points: points_for_lines(lines),
        }
    }
}

fn lines_in(cells: &[Cell], player: Player) -> usize {
    cells
        .windows(LINE_LENGTH)
        .filter(|window| window.iter().all(|&cell| cell == Cell::Stone(player)))
        .count()
}
