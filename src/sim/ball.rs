//! Ball entity and snooker ball types
//!
//! A ball only ever moves through `set_position` and `set_velocity`, so the
//! previous position and the motion flag can never drift out of sync.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::table::Table;

/// The eight kinds of snooker ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallType {
    Cue,
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

impl BallType {
    pub const ALL: [BallType; 8] = [
        BallType::Cue,
        BallType::Red,
        BallType::Yellow,
        BallType::Green,
        BallType::Brown,
        BallType::Blue,
        BallType::Pink,
        BallType::Black,
    ];

    /// Points awarded when this ball is potted
    pub const fn point_value(self) -> u32 {
        match self {
            BallType::Cue => 0,
            BallType::Red => 1,
            BallType::Yellow => 2,
            BallType::Green => 3,
            BallType::Brown => 4,
            BallType::Blue => 5,
            BallType::Pink => 6,
            BallType::Black => 7,
        }
    }

    /// Display colour (linear RGB)
    pub const fn color(self) -> [f32; 3] {
        match self {
            BallType::Cue => [0.875, 0.875, 0.75],
            BallType::Red => [0.875, 0.0625, 0.0625],
            BallType::Yellow => [0.75, 0.75, 0.125],
            BallType::Green => [0.125, 0.5, 0.125],
            BallType::Brown => [0.375, 0.1875, 0.0625],
            BallType::Blue => [0.125, 0.125, 0.875],
            BallType::Pink => [0.875, 0.375, 0.625],
            BallType::Black => [0.125, 0.125, 0.125],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BallType::Cue => "cue",
            BallType::Red => "red",
            BallType::Yellow => "yellow",
            BallType::Green => "green",
            BallType::Brown => "brown",
            BallType::Blue => "blue",
            BallType::Pink => "pink",
            BallType::Black => "black",
        }
    }
}

/// Visual representation of a ball (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallShape {
    #[default]
    Sphere,
    Cylinder,
}

impl BallShape {
    pub fn toggled(self) -> Self {
        match self {
            BallShape::Sphere => BallShape::Cylinder,
            BallShape::Cylinder => BallShape::Sphere,
        }
    }
}

/// A ball on the table
///
/// Positions are planar `(x, z)`; the height is fixed at the table's rest
/// height and only reappears in [`Ball::translation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    kind: BallType,
    pos: Vec2,
    prev_pos: Vec2,
    vel: Vec2,
    in_motion: bool,
    shape: BallShape,
    /// Speeds below this (squared) collapse to rest
    rest_speed_sq: f32,
    rest_height: f32,
}

impl Ball {
    /// Create a ball resting at `pos` on `table`
    pub fn new(kind: BallType, pos: Vec2, table: &Table) -> Self {
        let rest_speed = table.rest_speed();
        Self {
            kind,
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            in_motion: false,
            shape: BallShape::Sphere,
            rest_speed_sq: rest_speed * rest_speed,
            rest_height: table.rest_height(),
        }
    }

    /// Set the velocity, collapsing negligible speeds to an exact stop
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
        if vel.length_squared() < self.rest_speed_sq {
            self.stop();
        } else {
            self.in_motion = true;
        }
    }

    /// Move the ball, remembering where it was
    pub fn set_position(&mut self, pos: Vec2) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }

    /// Halt the ball immediately
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.in_motion = false;
    }

    pub fn toggle_shape(&mut self) {
        self.shape = self.shape.toggled();
    }

    #[inline]
    pub fn kind(&self) -> BallType {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn previous_position(&self) -> Vec2 {
        self.prev_pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn speed_squared(&self) -> f32 {
        self.vel.length_squared()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn is_in_motion(&self) -> bool {
        self.in_motion
    }

    #[inline]
    pub fn point_value(&self) -> u32 {
        self.kind.point_value()
    }

    #[inline]
    pub fn color(&self) -> [f32; 3] {
        self.kind.color()
    }

    #[inline]
    pub fn shape(&self) -> BallShape {
        self.shape
    }

    /// World-space translation (x, rest height, z) for the renderer
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.rest_height, self.pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball() -> Ball {
        Ball::new(BallType::Red, Vec2::new(0.1, -0.2), &Table::default())
    }

    #[test]
    fn test_point_values() {
        let values: Vec<u32> = BallType::ALL.iter().map(|k| k.point_value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_new_ball_is_at_rest() {
        let b = ball();
        assert!(!b.is_in_motion());
        assert_eq!(b.velocity(), Vec2::ZERO);
        assert_eq!(b.previous_position(), b.position());
    }

    #[test]
    fn test_set_position_records_previous() {
        let mut b = ball();
        b.set_position(Vec2::new(0.3, 0.4));
        b.set_position(Vec2::new(0.5, 0.6));
        assert_eq!(b.previous_position(), Vec2::new(0.3, 0.4));
        assert_eq!(b.position(), Vec2::new(0.5, 0.6));
    }

    #[test]
    fn test_translation_uses_rest_height() {
        let table = Table::default();
        let b = Ball::new(BallType::Blue, Vec2::new(0.25, -0.5), &table);
        let t = b.translation();
        assert_eq!(t.x, 0.25);
        assert_eq!(t.z, -0.5);
        assert!((t.y - table.rest_height()).abs() < 1e-6);
    }

    #[test]
    fn test_stop() {
        let mut b = ball();
        b.set_velocity(Vec2::new(0.01, 0.0));
        assert!(b.is_in_motion());
        b.stop();
        assert!(!b.is_in_motion());
        assert_eq!(b.speed(), 0.0);
    }

    #[test]
    fn test_shape_toggle() {
        let mut b = ball();
        assert_eq!(b.shape(), BallShape::Sphere);
        b.toggle_shape();
        assert_eq!(b.shape(), BallShape::Cylinder);
        b.toggle_shape();
        assert_eq!(b.shape(), BallShape::Sphere);
    }

    proptest! {
        #[test]
        fn slow_velocities_collapse_to_rest(angle in 0.0f32..std::f32::consts::TAU, frac in 0.0f32..0.99) {
            let limit = Table::default().rest_speed();
            let mut b = ball();
            b.set_velocity(Vec2::new(angle.cos(), angle.sin()) * limit * frac);
            prop_assert!(!b.is_in_motion());
            prop_assert_eq!(b.velocity(), Vec2::ZERO);
        }

        #[test]
        fn fast_velocities_are_stored_exactly(x in -1.0f32..1.0, z in -1.0f32..1.0) {
            let limit = Table::default().rest_speed();
            let v = Vec2::new(x, z);
            prop_assume!(v.length_squared() >= limit * limit);
            let mut b = ball();
            b.set_velocity(v);
            prop_assert!(b.is_in_motion());
            prop_assert_eq!(b.velocity(), v);
        }
    }
}
