//! Table geometry
//!
//! The origin is the centre of the cloth. `+z` points toward the baulk end,
//! `+x` is to the right when facing `+z`. Planar vectors store `(x, z)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::{CollisionModel, Settings};

/// Number of pockets on a snooker table
pub const POCKET_COUNT: usize = 6;

/// Immutable table and ball-physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    width: f32,
    length: f32,
    surface_height: f32,
    ball_radius: f32,
    pocket_radius: f32,
    pockets: [Vec2; POCKET_COUNT],
    drag_coefficient: f32,
    drag_constant: f32,
    collision_model: CollisionModel,
}

impl Default for Table {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Table {
    pub fn from_settings(settings: &Settings) -> Self {
        let half_w = settings.table_width / 2.0;
        let half_l = settings.table_length / 2.0;
        Self {
            width: settings.table_width,
            length: settings.table_length,
            surface_height: settings.surface_height,
            ball_radius: settings.ball_radius,
            // Corner pocket mouth spans two ball diameters across the diagonal
            pocket_radius: 4.0 * settings.ball_radius / std::f32::consts::SQRT_2,
            pockets: [
                Vec2::new(half_w, half_l),
                Vec2::new(half_w, -half_l),
                Vec2::new(-half_w, half_l),
                Vec2::new(-half_w, -half_l),
                Vec2::new(half_w, 0.0),
                Vec2::new(-half_w, 0.0),
            ],
            drag_coefficient: settings.drag_coefficient,
            drag_constant: settings.drag_constant,
            collision_model: settings.collision_model,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    #[inline]
    pub fn pocket_radius(&self) -> f32 {
        self.pocket_radius
    }

    pub fn pockets(&self) -> &[Vec2; POCKET_COUNT] {
        &self.pockets
    }

    #[inline]
    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    #[inline]
    pub fn drag_constant(&self) -> f32 {
        self.drag_constant
    }

    #[inline]
    pub fn collision_model(&self) -> CollisionModel {
        self.collision_model
    }

    /// Speed below which a ball snaps to rest
    #[inline]
    pub fn rest_speed(&self) -> f32 {
        self.drag_constant / self.drag_coefficient
    }

    /// Height of a resting ball's centre
    #[inline]
    pub fn rest_height(&self) -> f32 {
        self.surface_height + self.ball_radius
    }

    /// z of the baulk line
    #[inline]
    pub fn baulk_line(&self) -> f32 {
        self.length * 0.3
    }

    /// Radius of the "D" behind the baulk line
    #[inline]
    pub fn d_radius(&self) -> f32 {
        self.width / 6.0
    }

    /// Index of the first pocket whose capture radius contains `pos`
    pub fn pocket_containing(&self, pos: Vec2) -> Option<usize> {
        let r_sq = self.pocket_radius * self.pocket_radius;
        self.pockets
            .iter()
            .position(|p| p.distance_squared(pos) < r_sq)
    }
}
