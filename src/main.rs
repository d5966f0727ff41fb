//! Headless sprite motion demo.
//!
//! Runs the scene from [`spritemotion::game`] for a fixed number of ticks and
//! reports what happened. With `--trace`, prints one JSON object per tick
//! describing the player sprite.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 1200 --trace
//! ```

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use spritemotion::game;
use spritemotion::resources::simconfig::SimConfig;

/// Sprite motion demo
#[derive(Parser)]
#[command(version, about = "Headless sprite motion, atlas framing and collision demo")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of ticks to run, overriding the configuration.
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed for obstacle placement, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON line per tick with the player's state.
    #[arg(long)]
    trace: bool,

    /// Write the default configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(path) = cli.write_config {
        if let Err(e) = SimConfig::with_path(&path).save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        println!("Default configuration written to {}", path.display());
        return;
    }

    let mut config = match cli.config {
        Some(path) => {
            let mut config = SimConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                error!("{e}");
                std::process::exit(1);
            }
            config
        }
        None => {
            let mut config = SimConfig::new();
            if let Err(e) = config.load_from_file() {
                warn!("{e}; using defaults");
                config = SimConfig::new();
            }
            config
        }
    };
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    match game::run(config, cli.trace) {
        Ok(stats) => info!(
            "Ran {} ticks: {} flaps, {} obstacles passed, {} ticks in collision",
            stats.ticks, stats.flaps, stats.obstacles_passed, stats.collision_ticks
        ),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
