use pahtum::{Board, BoardConfig, GameState, GameStatus, Outcome, Player, Score};
use rand::rngs::StdRng;
use tracing::trace;

use crate::error::PolicyViolation;
use crate::player::Policy;
use crate::recording::Recorder;

pub enum GameResult {
    Finished {
        outcome: Outcome,
        scores: [Score; 2],
        board: Board,
    },
    IllegalMoveByPlayer {
        player: Player,
        err: PolicyViolation,
    },
}

/// Plays one game on a freshly generated board.
///
/// Returns an error only when recording fails, not when a policy
/// breaks the rules.
pub fn play_game(
    config: &BoardConfig,
    rng: &mut StdRng,
    policy_1: &mut dyn Policy,
    policy_2: &mut dyn Policy,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let state = GameState::new(config, rng);
    play_game_from(state, policy_1, policy_2, recorder)
}

/// Plays until the board is full, starting from the given state.
pub fn play_game_from(
    mut state: GameState,
    policy_1: &mut dyn Policy,
    policy_2: &mut dyn Policy,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    if let Some(rec) = recorder {
        rec.start_game(state.board());
    }

    let outcome = loop {
        if let GameStatus::Finished(outcome) = state.status() {
            break outcome;
        }
        let player = state.current_player();
        let choice = match player {
            Player::One => policy_1.choose_move(&state),
            Player::Two => policy_2.choose_move(&state),
        };
        let Some(coord) = choice else {
            return Ok(GameResult::IllegalMoveByPlayer {
                player,
                err: PolicyViolation::NoMove,
            });
        };
        state = match state.apply_move(coord) {
            Ok(next) => next,
            Err(err) => {
                return Ok(GameResult::IllegalMoveByPlayer {
                    player,
                    err: PolicyViolation::IllegalMove(err),
                })
            }
        };
        trace!(
            player = player.number(),
            row = coord.row,
            col = coord.col,
            L1 = state.board().count_lines(Player::One),
            L2 = state.board().count_lines(Player::Two),
        );
        if let Some(rec) = recorder {
            rec.store_move(player, coord);
        }
    };

    let scores = state.scores();

    if let Some(rec) = recorder {
        rec.write_game_recording(scores, outcome)?;
    }

    Ok(GameResult::Finished {
        outcome,
        scores,
        board: state.board().clone(),
    })
}
