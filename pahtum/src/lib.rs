pub use board::*;
pub use errors::*;
pub use game_state::*;
pub use scoring::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game_state;
mod scoring;
mod visualization;
