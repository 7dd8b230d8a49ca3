//! Table and physics settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! full-size table defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the second ball's velocity is rotated into the collision frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionModel {
    /// Both balls rotated with the same, correct transform
    #[default]
    Symmetric,
    /// Second ball's local z velocity computed as `vz·cos − vz·sin`,
    /// matching the first release of the game
    Legacy,
}

impl CollisionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionModel::Symmetric => "Symmetric",
            CollisionModel::Legacy => "Legacy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "symmetric" | "sym" => Some(CollisionModel::Symmetric),
            "legacy" => Some(CollisionModel::Legacy),
            _ => None,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Table ===
    /// Playing length (z extent), metres
    pub table_length: f32,
    /// Playing width (x extent), metres
    pub table_width: f32,
    /// Height of the cloth surface
    pub surface_height: f32,

    // === Balls ===
    pub ball_radius: f32,
    /// Multiplicative per-tick velocity decay (< 1)
    pub drag_coefficient: f32,
    /// Additive per-tick speed loss
    pub drag_constant: f32,
    pub collision_model: CollisionModel,

    // === Audio ===
    /// Overlapping collision sounds allowed
    pub collision_voices: usize,

    // === Driver ===
    /// Ticks per second the driver assumes when reporting elapsed time
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_length: TABLE_LENGTH,
            table_width: TABLE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            ball_radius: BALL_RADIUS,
            drag_coefficient: DRAG_COEFFICIENT,
            drag_constant: DRAG_CONSTANT,
            collision_model: CollisionModel::Symmetric,

            collision_voices: MAX_COLLISION_VOICES,

            tick_rate: (1.0 / SIM_DT).round() as u32,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
