use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use judge::{
    load_board_config, run_series, validate_board_config, RandomPolicy, Recorder, SeriesConfig,
};
use pahtum::BoardConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Don't start new games after this many seconds
    #[arg(short, long, default_value_t = 3600)]
    max_time: u64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON file with the board size and number of black holes
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the board, overrides the config file
    #[arg(long)]
    board_size: Option<usize>,

    /// Nominal number of black holes, overrides the config file
    #[arg(long)]
    black_holes: Option<usize>,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// Log the final board and result of every game
    #[arg(long, default_value_t = false)]
    show_boards: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut board_config = match &args.config {
        Some(path) => load_board_config(path)?,
        None => BoardConfig::default(),
    };
    if let Some(size) = args.board_size {
        board_config.size = size;
    }
    if let Some(black_holes) = args.black_holes {
        board_config.black_holes = black_holes;
    }
    validate_board_config(&board_config)?;
    info!(
        size = board_config.size,
        black_holes = board_config.black_holes,
        "Board configuration"
    );

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // Each policy gets its own RNG, derived from the main one
    let mut policy_1 = RandomPolicy::from_seed("random 1", rng.gen());
    let mut policy_2 = RandomPolicy::from_seed("random 2", rng.gen());

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let series_config = SeriesConfig {
        num_games: args.num_games,
        max_time: Duration::from_secs(args.max_time),
        show_boards: args.show_boards,
    };

    let report = run_series(
        &board_config,
        &series_config,
        &mut rng,
        &mut policy_1,
        &mut policy_2,
        &mut recorder,
    )?;

    println!("\n{}", report);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
