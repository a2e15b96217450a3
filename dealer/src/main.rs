use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use dealer::{play_game, Config, GameResult, Recorder, TerminalPlayer};
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unolite::{Game, INITIAL_HAND_SIZE};

#[derive(Parser)]
struct Args {
    /// Names of the players, in turn order. Asked for interactively when omitted
    players: Vec<String>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };
    let mut config = Config::new(seed, recorder);

    let mut player = TerminalPlayer::new(std::io::stdin().lock(), std::io::stdout());
    let mut out = std::io::stdout();

    writeln!(out, "========================================")?;
    writeln!(out, "         Welcome to UNO-Lite!           ")?;
    writeln!(out, "========================================")?;

    let names = if args.players.is_empty() {
        let count = player.prompt_player_count()?;
        player.prompt_names(count)?
    } else {
        args.players
    };

    let mut game = Game::new(names, &mut config.rng)?;
    writeln!(out, "\nFirst card flipped: {}", game.top_card())?;
    writeln!(
        out,
        "\nGame is ready! Each player has {} cards.\n",
        INITIAL_HAND_SIZE
    )?;

    let result = play_game(&mut game, &mut player, &mut out, &mut config.recorder)?;
    if let GameResult::Stalemate = result {
        info!(seed = config.seed, "No winner");
    }
    let standings = game
        .participants()
        .iter()
        .map(|p| format!("{} ({} cards left)", p.name, p.hand.count()))
        .join(", ");
    writeln!(out, "\nFinal hands: {}", standings)?;

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
