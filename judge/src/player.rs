use pahtum::{Coord, GameState};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Decides where the current player puts their next stone.
pub trait Policy {
    fn name(&self) -> &str;

    /// Picks one of `state.available_moves()`.
    ///
    /// Is only called while the game is in progress, so returning `None` or a
    /// coordinate that is not available is a contract violation.
    fn choose_move(&mut self, state: &GameState) -> Option<Coord>;
}

/// Picks uniformly at random among the available moves.
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(name: &str, rng: StdRng) -> Self {
        Self {
            name: String::from(name),
            rng,
        }
    }

    pub fn from_seed(name: &str, seed: u64) -> Self {
        Self::new(name, StdRng::seed_from_u64(seed))
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, state: &GameState) -> Option<Coord> {
        state.available_moves().choose(&mut self.rng).copied()
    }
}
