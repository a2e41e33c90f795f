use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use snek::game::GameConfig;
use snek::modes::PlayMode;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snek")]
#[command(version, about = "Terminal snake with a flood-fill autopilot")]
struct Cli {
    /// Side of the playable square
    #[arg(long, default_value = "12")]
    size: usize,

    /// Tick rate at the start of a round
    #[arg(long, default_value = "3")]
    fps: f64,

    /// Keep the tick rate constant as the snake grows
    #[arg(long)]
    no_speed_ramp: bool,

    /// Start every round with the autopilot engaged
    #[arg(long)]
    autopilot: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log file; the terminal itself is taken by the game
    #[arg(long, default_value = "snek.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = GameConfig {
        arena_size: cli.size,
        base_fps: cli.fps,
        speed_ramp: !cli.no_speed_ramp,
        autopilot: cli.autopilot,
        seed: cli.seed,
    };
    config.validate().context("Invalid game configuration")?;
    log::info!("starting with {:?}", config);

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    println!("Game closed.");
    Ok(())
}
