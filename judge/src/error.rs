use pahtum::IllegalMove;

/// A policy broke its contract of returning one of the available moves.
#[derive(Debug, PartialEq, Eq)]
pub enum PolicyViolation {
    /// The policy returned no move although the game was still in progress.
    NoMove,
    IllegalMove(IllegalMove),
}

impl std::error::Error for PolicyViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolicyViolation::IllegalMove(err) => Some(err),
            PolicyViolation::NoMove => None,
        }
    }
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyViolation::NoMove => {
                write!(f, "The policy did not choose a move, but moves were available")
            }
            PolicyViolation::IllegalMove(_) => {
                write!(f, "The policy chose a move that is not available")
            }
        }
    }
}
