use std::time::{Duration, Instant};

use pahtum::{BoardConfig, Outcome, Player};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::{play_game, GameResult};
use crate::player::Policy;
use crate::recording::Recorder;

/// How many games to play, and for how long at most.
#[derive(Clone, Copy, Debug)]
pub struct SeriesConfig {
    pub num_games: usize,
    /// No new game is started once this much time has passed.
    pub max_time: Duration,
    /// Log the final board and the end banner of every game.
    pub show_boards: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub draws: usize,
    /// Indexed by [`Player::idx()`].
    pub wins: [usize; 2],
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(player) => self.wins[player.idx()] += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games_played(&self) -> usize {
        self.draws + self.wins[0] + self.wins[1]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesReport {
    pub tally: Tally,
    pub num_games_requested: usize,
    pub elapsed: Duration,
}

impl std::fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Elapsed time: {} seconds ===", self.elapsed.as_secs())?;
        writeln!(f, "  Player 1: {} victories", self.tally.wins[0])?;
        writeln!(f, "  Player 2: {} victories", self.tally.wins[1])?;
        writeln!(f, "  Draws: {}", self.tally.draws)?;
        write!(f, "===============================")
    }
}

/// Plays games one after the other until `num_games` are done or `max_time` is up.
///
/// A policy making an illegal move ends the series with an error.
pub fn run_series(
    board_config: &BoardConfig,
    series_config: &SeriesConfig,
    rng: &mut StdRng,
    policy_1: &mut dyn Policy,
    policy_2: &mut dyn Policy,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<SeriesReport> {
    let start_time = Instant::now();
    let mut tally = Tally::default();

    for game_idx in 0..series_config.num_games {
        if start_time.elapsed() >= series_config.max_time {
            info!(game_idx, "Time is up, not starting any more games");
            break;
        }
        match play_game(board_config, rng, policy_1, policy_2, recorder)? {
            GameResult::Finished {
                outcome,
                scores,
                board,
            } => {
                debug!(
                    game_idx,
                    %outcome,
                    lines_1 = scores[0].lines,
                    points_1 = scores[0].points,
                    lines_2 = scores[1].lines,
                    points_2 = scores[1].points,
                );
                if series_config.show_boards {
                    info!("Game {}: {}\n{}", game_idx, outcome, board);
                }
                tally.record(outcome);
            }
            GameResult::IllegalMoveByPlayer { player, err } => {
                let name = match player {
                    Player::One => policy_1.name(),
                    Player::Two => policy_2.name(),
                };
                return Err(anyhow::Error::new(err).context(format!(
                    "Illegal move by {} (player {}) in game {}",
                    name,
                    player.number(),
                    game_idx
                )));
            }
        }
    }

    Ok(SeriesReport {
        tally,
        num_games_requested: series_config.num_games,
        elapsed: start_time.elapsed(),
    })
}
