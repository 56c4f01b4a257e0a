mod config;
mod error;
mod game;
mod player;
mod recording;
mod series;
pub use config::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use series::*;
