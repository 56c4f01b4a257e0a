use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::OutOfBounds;

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const DEFAULT_BLACK_HOLES: usize = 5;
/// The largest supported side length of a board.
pub const MAX_BOARD_SIZE: usize = 1024;

/// One of the two players. Player one always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player number as shown to humans, i.e. 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Index into per-player arrays like `[T; 2]`.
    pub fn idx(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// The content of a single cell.
///
/// Once a cell is no longer [`Cell::Empty`], it never changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    /// An obstacle. It can't hold a stone and is never part of a line.
    BlackHole,
    Stone(Player),
}

/// A position on the board, `(0, 0)` being the top left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The parameters that a fresh board is generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Length of a side of the square board.
    pub size: usize,
    /// The nominal number of black holes.
    ///
    /// See [`Self::black_hole_draws()`] for how many are actually sampled.
    pub black_holes: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            black_holes: DEFAULT_BLACK_HOLES,
        }
    }
}

impl BoardConfig {
    /// How many coordinates are drawn when placing black holes.
    ///
    /// This is one more than `black_holes`. The draws are made with replacement,
    /// so a coordinate drawn twice yields a single black hole, and the board
    /// may end up with fewer black holes than were drawn.
    pub fn black_hole_draws(&self) -> usize {
        self.black_holes + 1
    }
}

/// A square grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board where every cell is empty.
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        assert!(
            size <= MAX_BOARD_SIZE,
            "board size must be at most {}",
            MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Creates an otherwise empty board with randomly placed black holes.
    ///
    /// Panics if the configured size is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn generate<R: Rng>(config: &BoardConfig, rng: &mut R) -> Self {
        let mut board = Self::empty(config.size);
        for _ in 0..config.black_hole_draws() {
            let row = rng.gen_range(0..config.size);
            let col = rng.gen_range(0..config.size);
            board.cells[row * config.size + col] = Cell::BlackHole;
        }
        board
    }

    /// Creates a board from a list of rows.
    ///
    /// Panics if the rows don't form a non-empty square.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let size = rows.len();
        assert!(size > 0, "board size must be at least 1");
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "board must be square");
            cells.extend_from_slice(row);
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given position, or `None` if it's off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Like [`Self::get()`], but with a descriptive error.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.get(row, col).ok_or(OutOfBounds {
            row,
            col,
            size: self.size,
        })
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterates over the cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords_where(|cell| cell == Cell::Empty)
    }

    /// All black holes in row-major order.
    pub fn black_holes(&self) -> Vec<Coord> {
        self.coords_where(|cell| cell == Cell::BlackHole)
    }

    pub fn num_stones(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Stone(player))
            .count()
    }

    /// Places a stone on an empty cell.
    ///
    /// Callers must have checked that the cell is on the board and empty.
    pub(crate) fn place_stone(&mut self, coord: Coord, player: Player) {
        let idx = coord.row * self.size + coord.col;
        debug_assert_eq!(self.cells[idx], Cell::Empty);
        self.cells[idx] = Cell::Stone(player);
    }

    fn coords_where(&self, pred: impl Fn(Cell) -> bool) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| pred(cell))
            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generated_board_has_black_holes_and_nothing_else() {
        let config = BoardConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::generate(&config, &mut rng);
            let num_black_holes = board.black_holes().len();
            assert!(num_black_holes >= 1);
            assert!(num_black_holes <= config.black_hole_draws());
            assert_eq!(
                board.empty_cells().len() + num_black_holes,
                DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE
            );
        }
    }

    #[test]
    fn duplicate_draws_collapse() {
        // On a 1x1 board every draw hits the same cell.
        let config = BoardConfig {
            size: 1,
            black_holes: 5,
        };
        let board = Board::generate(&config, &mut StdRng::seed_from_u64(0));
        assert_eq!(board.black_holes(), vec![Coord::new(0, 0)]);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let board = Board::empty(7);
        assert_eq!(board.cell_at(6, 6), Ok(Cell::Empty));
        assert_eq!(
            board.cell_at(7, 0),
            Err(OutOfBounds {
                row: 7,
                col: 0,
                size: 7
            })
        );
        assert!(board.cell_at(0, 7).is_err());
    }

    #[test]
    fn columns_and_rows() {
        let e = Cell::Empty;
        let b = Cell::BlackHole;
        let one = Cell::Stone(Player::One);
        let board = Board::from_rows(&[[one, e, e], [e, b, e], [one, e, b]]);
        assert_eq!(board.column(0).collect::<Vec<_>>(), vec![one, e, one]);
        assert_eq!(board.column(2).collect::<Vec<_>>(), vec![e, e, b]);
        assert_eq!(board.rows().nth(1), Some(&[e, b, e][..]));
        assert_eq!(board.black_holes(), vec![Coord::new(1, 1), Coord::new(2, 2)]);
        assert_eq!(board.num_stones(Player::One), 2);
        assert_eq!(board.num_stones(Player::Two), 0);
    }

    #[test]
    #[should_panic]
    fn zero_sized_board_panics() {
        Board::empty(0);
    }

    #[test]
    #[should_panic(expected = "board size must be at most")]
    fn oversized_board_panics() {
        Board::empty(usize::MAX / 2);
    }
}
