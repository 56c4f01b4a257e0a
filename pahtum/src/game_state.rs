use rand::Rng;

use crate::{Board, BoardConfig, Cell, Coord, IllegalMove, Outcome, Player, Score};

/// Has the game ended, and if so, how?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// Everything there is to know about a game in progress.
///
/// Moves don't mutate a state, [`Self::apply_move()`] returns a new one, so a
/// state can be handed to a policy while the game continues elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// The empty cells. Row-major at the start; moves remove entries without
    /// reordering the rest.
    available_moves: Vec<Coord>,
    current_player: Player,
}

impl GameState {
    /// A fresh game on a board with randomly placed black holes.
    pub fn new<R: Rng>(config: &BoardConfig, rng: &mut R) -> Self {
        Self::from_board(Board::generate(config, rng))
    }

    /// Continues a game from the given board.
    ///
    /// Player one is to move unless they already have more stones than player two.
    pub fn from_board(board: Board) -> Self {
        let current_player = if board.num_stones(Player::One) > board.num_stones(Player::Two) {
            Player::Two
        } else {
            Player::One
        };
        Self {
            available_moves: board.empty_cells(),
            board,
            current_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn available_moves(&self) -> &[Coord] {
        &self.available_moves
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_finished(&self) -> bool {
        self.available_moves.is_empty()
    }

    /// Places a stone of the current player and hands the turn to the opponent.
    ///
    /// Fails if the coordinate is not one of the [available moves](Self::available_moves).
    /// `self` is left untouched either way.
    pub fn apply_move(&self, coord: Coord) -> Result<GameState, IllegalMove> {
        let Some(move_idx) = self.available_moves.iter().position(|&c| c == coord) else {
            return Err(self.explain_unavailable(coord));
        };

        let mut next = self.clone();
        next.board.place_stone(coord, self.current_player);
        next.available_moves.remove(move_idx);
        next.current_player = self.current_player.opponent();
        Ok(next)
    }

    /// Lines and points of both players, indexed by [`Player::idx()`].
    pub fn scores(&self) -> [Score; 2] {
        [
            self.board.score(Player::One),
            self.board.score(Player::Two),
        ]
    }

    pub fn status(&self) -> GameStatus {
        if !self.is_finished() {
            return GameStatus::InProgress;
        }
        let [score_1, score_2] = self.scores();
        GameStatus::Finished(Outcome::from_points(score_1.points, score_2.points))
    }

    fn explain_unavailable(&self, coord: Coord) -> IllegalMove {
        match self.board.cell_at(coord.row, coord.col) {
            Err(err) => IllegalMove::OutOfBounds(err),
            Ok(Cell::BlackHole) => IllegalMove::BlackHole { coord },
            Ok(Cell::Stone(player)) => IllegalMove::Occupied { coord, player },
            Ok(Cell::Empty) => unreachable!("empty cell {} missing from available moves", coord),
        }
    }
}
