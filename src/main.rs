//! Snooker Sim entry point
//!
//! Headless driver: racks a frame, plays seeded random shots until the cue
//! ball is potted or the shot budget runs out, and prints a JSON summary.
//!
//! Usage: `snooker-sim [settings.json] [--seed N] [--shots N]`

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use snooker_sim::audio::AudioManager;
use snooker_sim::scoreboard::{Player, Scoreboard};
use snooker_sim::settings::Settings;
use snooker_sim::sim::{EventLog, EventSink, GameEvent, Simulation, run_until_settled};

/// Ticks allowed for one shot to come to rest (over five minutes at 60 Hz)
const MAX_TICKS_PER_SHOT: u64 = 20_000;
/// Power per cue "key", matching the 1-9 keyboard strikes
const POWER_STEP: f32 = 0.016;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file; defaults are used when omitted
    settings_path: Option<PathBuf>,
    /// Seed for the shot generator
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Maximum number of shots to play
    #[arg(long, default_value_t = 20)]
    shots: u32,
}

/// Everything listening to the table during a frame
struct Frame {
    log: EventLog,
    audio: AudioManager,
    scoreboard: Scoreboard,
}

impl EventSink for Frame {
    fn on_event(&mut self, event: GameEvent) {
        self.audio.on_event(event);
        self.scoreboard.on_event(event);
        self.log.on_event(event);
    }
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    shots_played: u32,
    ticks: u64,
    seconds: f32,
    collisions: u32,
    sounds_played: u64,
    potted: Vec<&'static str>,
    balls_left: usize,
    player_one: u32,
    player_two: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = match &args.settings_path {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    log::info!(
        "Snooker Sim starting (seed {}, {} shots, {} collision model)",
        args.seed,
        args.shots,
        settings.collision_model.as_str()
    );

    let mut rng = Pcg32::seed_from_u64(args.seed);
    let mut sim = Simulation::from_settings(&settings);
    let mut frame = Frame {
        log: EventLog::new(),
        audio: AudioManager::new(settings.collision_voices),
        scoreboard: Scoreboard::new(),
    };

    let mut shots_played = 0;
    for shot in 0..args.shots {
        if sim.cue_ball().is_none() {
            log::info!("Cue ball potted, frame over");
            break;
        }

        let angle = rng.random_range(-std::f32::consts::PI..std::f32::consts::PI);
        let power = rng.random_range(1..=9u32) as f32 * POWER_STEP;
        let points_before = frame.log.points;

        sim.strike(angle, power);
        let ticks = run_until_settled(&mut sim, MAX_TICKS_PER_SHOT, &mut frame);
        shots_played += 1;

        let scored = frame.log.points - points_before;
        log::info!(
            "Shot {}: angle={:.2} power={:.3} settled after {} ticks, {} points",
            shot + 1,
            angle,
            power,
            ticks,
            scored
        );
        if ticks >= MAX_TICKS_PER_SHOT {
            log::warn!("Shot {} still moving after {} ticks", shot + 1, ticks);
        }
        if scored == 0 {
            frame.scoreboard.switch_player();
        }
    }

    let summary = Summary {
        seed: args.seed,
        shots_played,
        ticks: sim.time_ticks,
        seconds: sim.time_ticks as f32 / settings.tick_rate.max(1) as f32,
        collisions: frame.log.collisions,
        sounds_played: frame.audio.total_plays(),
        potted: frame.log.potted().map(|k| k.as_str()).collect(),
        balls_left: sim.balls().active_count(),
        player_one: frame.scoreboard.total(Player::One),
        player_two: frame.scoreboard.total(Player::Two),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}
