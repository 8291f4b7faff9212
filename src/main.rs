use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use lib_2048::{
    ai::{random::RandomAi, EfficiencyAi},
    session, ChangeDetection, Game, GameConfig,
};
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod render;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Player {
    /// Pick the move leaving the most empty cells, then the highest score
    Auto,
    /// Pick uniformly among the moves that change the board
    Random,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 to the end with a built-in player")]
struct Cli {
    /// Player that chooses each move
    #[arg(long, value_enum, default_value_t = Player::Auto)]
    player: Player,

    /// Seed for tile spawning and random moves (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u32>,

    /// JSON engine configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Count any cell change as a changed board, overriding the config file
    #[arg(long)]
    layout_changes: bool,

    /// Print the summary as JSON instead of drawing the board
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;

            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if cli.layout_changes {
        config.change_detection = ChangeDetection::Layout;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().next_u64());

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let player_rng = ChaCha8Rng::from_rng(&mut rng)?;
    let mut game = Game::with_config(rng, config);

    info!(
        "seed {seed}, player {:?}, change detection {:?}",
        cli.player,
        game.config().change_detection
    );

    let summary = match cli.player {
        Player::Auto => session::play_out(&mut game, &mut EfficiencyAi, cli.max_moves),
        Player::Random => {
            session::play_out(&mut game, &mut RandomAi::new(player_rng), cli.max_moves)
        }
    };

    info!(
        "{} after {} moves: score {}, max tile {}",
        if summary.finished { "game over" } else { "stopped" },
        summary.moves,
        summary.score,
        summary.max_tile
    );

    let mut stdout = io::stdout().lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    } else {
        let colour = stdout.is_terminal();
        render::draw_board(&mut stdout, &summary.board, summary.score, colour)?;
    }

    Ok(())
}
