//! Face Shooter headless driver
//!
//! Runs sessions with the autopilot standing in for the face tracker, at a
//! fixed frame rate. Useful for soak runs, tuning and recording scenes.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use face_shooter::steering::{Autopilot, SteeringSource};
use face_shooter::{GameSession, HighScores, Settings};

#[derive(Parser)]
#[command(name = "face-shooter")]
#[command(about = "Run face-shooter sessions headless with the autopilot steering")]
struct Args {
    /// RNG seed for the first run (later runs use seed + run index)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulation frames per second
    #[arg(long, default_value_t = 30.0)]
    fps: f32,

    /// Stop a run after this many ticks even if the ship survives
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// Number of runs (the session is reset between runs)
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// JSON file overriding the default settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print every snapshot as a JSON line on stdout
    #[arg(long)]
    json: bool,

    /// Sleep between frames and honor banner holds like a real display would
    #[arg(long)]
    realtime: bool,
}

fn load_settings(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            log::info!("Loaded settings from {}", path.display());
            Settings::from_json(&text)?
        }
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    Ok(settings)
}

fn pause(secs: f32) {
    if secs > 0.0 {
        std::thread::sleep(Duration::from_secs_f32(secs));
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(format!("--fps must be positive, got {}", args.fps).into());
    }
    let dt = 1.0 / args.fps;

    let settings = load_settings(args)?;
    let mut pilot = Autopilot::new(&settings);
    let mut session = GameSession::new(settings)?;
    let mut high_scores = HighScores::new();

    for run in 0..args.runs {
        if run > 0 {
            match args.seed {
                Some(seed) => {
                    let reseeded = Settings {
                        seed: Some(seed.wrapping_add(u64::from(run))),
                        ..session.settings().clone()
                    };
                    session = GameSession::new(reseeded)?;
                }
                // Keep the RNG stream going so each run differs
                None => session.reset(),
            }
        }
        log::info!("Run {} (seed {})", run + 1, session.seed());

        let mut scene = session.snapshot();
        let mut ticks = 0;
        while !scene.game_over && ticks < args.max_ticks {
            if args.realtime {
                // Banner holds stall the loop; the next tick resumes play
                pause(scene.hold_secs.unwrap_or(dt));
            }
            let steering_x = pilot.steering_x(&scene);
            scene = session.tick(steering_x, dt)?;
            ticks += 1;

            if args.json {
                println!("{}", serde_json::to_string(&scene)?);
            }
        }

        if scene.game_over {
            if args.realtime {
                pause(scene.hold_secs.unwrap_or_default());
            }
            log::info!(
                "Run {} ended after {} ticks: score {}, phase {}",
                run + 1,
                ticks,
                scene.score,
                scene.phase
            );
        } else {
            log::info!(
                "Run {} survived {} ticks: score {}, phase {}",
                run + 1,
                ticks,
                scene.score,
                scene.phase
            );
        }

        if let Some(rank) = high_scores.add_score(scene.score, scene.phase, session.seed()) {
            log::info!("New high score #{}: {}", rank, scene.score);
        }
    }

    for (i, entry) in high_scores.entries.iter().enumerate() {
        eprintln!(
            "{:>2}. {:>8}  phase {:>3}  seed {}",
            i + 1,
            entry.score,
            entry.phase,
            entry.seed
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
