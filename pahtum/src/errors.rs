use crate::{Coord, Player};

/// The error type for [`Board::cell_at()`](crate::Board::cell_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position ({}, {}) is outside of the {}x{} board",
            self.row, self.col, self.size, self.size
        )
    }
}

/// The error type for [`GameState::apply_move()`](crate::GameState::apply_move).
///
/// A move is illegal exactly when its coordinate is not among the available moves.
/// The variants say why that is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds(OutOfBounds),
    BlackHole { coord: Coord },
    Occupied { coord: Coord, player: Player },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds(OutOfBounds { row, col, .. }) => {
                write!(f, "Stone was placed off the board at ({}, {})", row, col)
            }
            IllegalMove::BlackHole { coord } => {
                write!(f, "Stone was placed on the black hole at {}", coord)
            }
            IllegalMove::Occupied { coord, player } => write!(
                f,
                "Stone was placed at {}, which is already taken by player {}",
                coord,
                player.number()
            ),
        }
    }
}
