//! Snooker Sim - planar snooker ball physics
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (balls, table, rack, collisions, tick)
//! - `audio`: Headless collision voice pool for sound playback
//! - `scoreboard`: Two-player dial scoreboard fed by scoring events
//! - `renderer`: GPU-ready per-ball instance snapshots
//! - `settings`: Data-driven table and physics configuration

pub mod audio;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use scoreboard::{Player, Scoreboard};
pub use settings::{CollisionModel, Settings};

use glam::Vec2;

/// Physical constants of a full-size snooker table, in metres and per-tick units
pub mod consts {
    /// Nominal duration of one simulation tick (one rendered frame, ~16 ms).
    /// Velocities and drag are expressed per tick, not per second.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Table playing area
    pub const TABLE_LENGTH: f32 = 3.569;
    pub const TABLE_WIDTH: f32 = 1.778;
    /// Height of the cloth above the floor (leg height + half table depth)
    pub const SURFACE_HEIGHT: f32 = 0.55;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.02625;
    /// Multiplicative per-tick velocity decay
    pub const DRAG_COEFFICIENT: f32 = 0.985;
    /// Additive per-tick speed reduction
    pub const DRAG_CONSTANT: f32 = 0.00001;

    /// Number of ball slots in a snooker rack (cue + 6 colours + 15 reds)
    pub const SLOT_COUNT: usize = 22;
    /// Where potted balls are parked, far outside the playing area
    pub const OFF_TABLE: f32 = 256.0;

    /// Overlapping collision sounds allowed at once
    pub const MAX_COLLISION_VOICES: usize = 4;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert a table heading (0 = +z, π/2 = +x) into a scaled planar vector
#[inline]
pub fn heading_to_vec(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::new(angle.sin() * magnitude, angle.cos() * magnitude)
}
