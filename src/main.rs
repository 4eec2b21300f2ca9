//! Demo entry point
//!
//! Wires the headless services to the director and runs one autopiloted
//! session: the robot random-walks the grid while artifacts rain down.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use grid_greed::Director;
use grid_greed::consts::CELL_SIZE;
use grid_greed::services::{AutopilotKeyboard, HeadlessVideo};
use grid_greed::settings::Settings;
use grid_greed::sim::{Actor, Cast, Point, Role, spawn_artifact};

#[derive(Parser, Debug)]
#[command(name = "grid-greed", about = "A grid arcade collector, autopiloted")]
struct Args {
    /// Settings file (JSON).
    #[arg(long, default_value = "grid-greed.json")]
    settings: PathBuf,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the session length in frames.
    #[arg(long)]
    frames: Option<usize>,

    /// Override the number of artifacts in play.
    #[arg(long)]
    artifacts: Option<usize>,

    /// Write the effective settings back to the settings file and exit.
    #[arg(long)]
    write_settings: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(frames) = args.frames {
        settings.frames = frames;
    }
    if let Some(artifacts) = args.artifacts {
        settings.artifact_count = artifacts;
    }

    if args.write_settings {
        settings.save(&args.settings)?;
        log::info!("wrote {}", args.settings.display());
        return Ok(());
    }

    let mut cast = build_cast(&settings);
    let keyboard = AutopilotKeyboard::new(settings.seed);
    let video = HeadlessVideo::new(settings.width, settings.height, settings.frames);

    let mut director = Director::new(keyboard, video, settings.seed);
    director.start_game(&mut cast);

    let score = director.score();
    let (_, video) = director.into_services();
    log::info!("rendered {} frames", video.frames().len());
    println!("final score: {score}");
    Ok(())
}

/// Game setup: one banner, one robot at the bottom center, and the starting
/// artifact field.
fn build_cast(settings: &Settings) -> Cast {
    let mut cast = Cast::new();

    let mut banner = Actor::new();
    banner.position = Point::new(CELL_SIZE, 0);
    cast.add_actor(Role::Banners, banner);

    let mut robot = Actor::new();
    robot.text = "#".into();
    robot.position = Point::new(settings.width / 2, settings.height - CELL_SIZE);
    cast.add_actor(Role::Robots, robot);

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    for _ in 0..settings.artifact_count {
        cast.add_actor(Role::Artifacts, spawn_artifact(&mut rng));
    }

    cast
}
