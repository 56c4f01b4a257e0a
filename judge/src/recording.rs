use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use pahtum::{Board, Cell, Coord, Outcome, Player, Score};
use serde::{Deserialize, Serialize};

/// Writes every finished game as a numbered JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    /// Starts recording a new game, discarding any unfinished one.
    ///
    /// Stones that are already on the board are stored too, so that the game
    /// can be replayed from the recording alone.
    pub fn start_game(&mut self, board: &Board) {
        let mut initial_stones = Vec::new();
        for (row, cells) in board.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if let Cell::Stone(player) = cell {
                    initial_stones.push(RecordedMove { player, row, col });
                }
            }
        }
        self.current = Some(GameRecording {
            board_size: board.size(),
            black_holes: board.black_holes(),
            initial_stones,
            moves: Vec::new(),
            scores: None,
            outcome: None,
        });
    }

    pub fn store_move(&mut self, player: Player, coord: Coord) {
        if let Some(recording) = &mut self.current {
            recording.moves.push(RecordedMove {
                player,
                row: coord.row,
                col: coord.col,
            });
        }
    }

    /// Writes the game started by the last [`Self::start_game()`] to `game_NNNNNN.json`.
    pub fn write_game_recording(
        &mut self,
        scores: [Score; 2],
        outcome: Outcome,
    ) -> anyhow::Result<()> {
        let Some(mut recording) = self.current.take() else {
            anyhow::bail!("No game is being recorded");
        };
        recording.scores = Some(scores);
        recording.outcome = Some(outcome);

        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub board_size: usize,
    pub black_holes: Vec<Coord>,
    /// Stones placed before the recorded moves, in row-major order.
    #[serde(default)]
    pub initial_stones: Vec<RecordedMove>,
    pub moves: Vec<RecordedMove>,
    pub scores: Option<[Score; 2]>,
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

#[cfg(test)]
mod tests {
    use pahtum::{BoardConfig, GameState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game::{play_game, play_game_from, GameResult};
    use crate::player::RandomPolicy;

    fn temp_directory(name: &str) -> PathBuf {
        let directory =
            std::env::temp_dir().join(format!("pahtum_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        directory
    }

    fn stone(player: Player, row: usize, col: usize) -> RecordedMove {
        RecordedMove { player, row, col }
    }

    /// Rebuilds the final state from a recording, checking whose turn it is along the way.
    fn replay(recording: &GameRecording) -> GameState {
        let size = recording.board_size;
        let mut rows = vec![vec![Cell::Empty; size]; size];
        for coord in &recording.black_holes {
            rows[coord.row][coord.col] = Cell::BlackHole;
        }
        for stone in &recording.initial_stones {
            rows[stone.row][stone.col] = Cell::Stone(stone.player);
        }
        let mut state = GameState::from_board(Board::from_rows(&rows));
        for mv in &recording.moves {
            assert_eq!(state.current_player(), mv.player);
            state = state.apply_move(Coord::new(mv.row, mv.col)).unwrap();
        }
        state
    }

    #[test]
    fn missing_directory_is_rejected() {
        assert!(Recorder::new(PathBuf::from("/does/not/exist")).is_err());
    }

    #[test]
    fn finished_games_are_written() {
        let directory = temp_directory("recording");
        let mut recorder = Some(Recorder::new(directory.clone()).unwrap());

        let mut rng = StdRng::seed_from_u64(9);
        let mut policy_1 = RandomPolicy::from_seed("one", 1);
        let mut policy_2 = RandomPolicy::from_seed("two", 2);
        let config = BoardConfig::default();
        for _ in 0..2 {
            let result = play_game(
                &config,
                &mut rng,
                &mut policy_1,
                &mut policy_2,
                &mut recorder,
            )
            .unwrap();
            assert!(matches!(result, GameResult::Finished { .. }));
        }

        let contents = std::fs::read_to_string(directory.join("game_000002.json")).unwrap();
        let recording: GameRecording = serde_json::from_str(&contents).unwrap();
        assert!(directory.join("game_000001.json").is_file());
        std::fs::remove_dir_all(&directory).unwrap();

        assert_eq!(recording.board_size, 7);
        assert_eq!(
            recording.moves.len() + recording.black_holes.len(),
            config.size * config.size
        );
        assert!(recording.initial_stones.is_empty());
        assert_eq!(recording.moves[0].player, Player::One);
        assert_eq!(recording.moves[1].player, Player::Two);

        // Replaying the moves gives the same result
        let state = replay(&recording);
        assert!(state.is_finished());
        assert_eq!(recording.scores, Some(state.scores()));
        let [score_1, score_2] = state.scores();
        assert_eq!(
            recording.outcome,
            Some(Outcome::from_points(score_1.points, score_2.points))
        );
    }

    #[test]
    fn preset_stones_are_replayable() {
        let directory = temp_directory("preset");
        let mut recorder = Some(Recorder::new(directory.clone()).unwrap());

        let (e, b, x, o) = (
            Cell::Empty,
            Cell::BlackHole,
            Cell::Stone(Player::One),
            Cell::Stone(Player::Two),
        );
        let board = Board::from_rows(&[
            [x, x, x, e, o],
            [o, b, e, e, e],
            [e, e, e, e, e],
            [e, o, e, e, e],
            [e, e, e, e, e],
        ]);
        let state = GameState::from_board(board);
        let mut policy_1 = RandomPolicy::from_seed("one", 3);
        let mut policy_2 = RandomPolicy::from_seed("two", 4);
        let result = play_game_from(state, &mut policy_1, &mut policy_2, &mut recorder).unwrap();
        let GameResult::Finished { board, .. } = result else {
            panic!("expected the game to finish");
        };

        let contents = std::fs::read_to_string(directory.join("game_000001.json")).unwrap();
        let recording: GameRecording = serde_json::from_str(&contents).unwrap();
        std::fs::remove_dir_all(&directory).unwrap();

        assert_eq!(
            recording.initial_stones,
            vec![
                stone(Player::One, 0, 0),
                stone(Player::One, 0, 1),
                stone(Player::One, 0, 2),
                stone(Player::Two, 0, 4),
                stone(Player::Two, 1, 0),
                stone(Player::Two, 3, 1),
            ]
        );
        assert_eq!(recording.black_holes, vec![Coord::new(1, 1)]);
        assert_eq!(recording.moves.len(), 25 - 1 - 6);

        let state = replay(&recording);
        assert_eq!(state.board(), &board);
        assert_eq!(recording.scores, Some(state.scores()));
    }

    #[test]
    fn writing_without_a_game_fails() {
        let directory = std::env::temp_dir();
        let mut recorder = Recorder::new(directory).unwrap();
        let score = Score { lines: 0, points: 0 };
        assert!(recorder.write_game_recording([score, score], Outcome::Draw).is_err());
    }
}
