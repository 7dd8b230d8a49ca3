//! Collision detection and response
//!
//! Pure functions on positions and per-tick velocities. The tick decides
//! which balls to test and commits the results through the ball mutators.

use glam::Vec2;

use super::table::Table;
use crate::settings::CollisionModel;

/// Outcome of moving one ball for a tick against the cushions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallStep {
    /// Position after integration and any reflection
    pub pos: Vec2,
    /// Velocity after drag and any reflection
    pub vel: Vec2,
    /// Whether the x (side) cushions were struck
    pub bounced_x: bool,
    /// Whether the z (end) cushions were struck
    pub bounced_z: bool,
}

/// Integrate one tick and bounce off the cushions.
///
/// Each axis is handled independently. The wall to test is chosen from the
/// sign of the velocity *after* multiplicative drag; a component of exactly
/// zero tests the negative wall.
pub fn resolve_walls(pos: Vec2, vel: Vec2, table: &Table) -> WallStep {
    let drag = table.drag_coefficient();
    let r = table.ball_radius();
    let ca = table.drag_constant();

    let (x, vx, bounced_x) = resolve_axis(pos.x + vel.x, vel.x * drag, table.half_width(), r, ca);
    let (z, vz, bounced_z) = resolve_axis(pos.y + vel.y, vel.y * drag, table.half_length(), r, ca);

    WallStep {
        pos: Vec2::new(x, z),
        vel: Vec2::new(vx, vz),
        bounced_x,
        bounced_z,
    }
}

/// One axis of [`resolve_walls`]: returns (position, velocity, bounced)
fn resolve_axis(mut p: f32, mut v: f32, half_extent: f32, radius: f32, drag_constant: f32) -> (f32, f32, bool) {
    let mut bounced = false;
    if v > 0.0 {
        // + = leading edge past the positive cushion
        let penetration = p + radius - half_extent;
        if penetration > 0.0 {
            p -= penetration * 2.0;
            v = -v;
            bounced = true;
        }
        v -= drag_constant;
    } else {
        // - = leading edge past the negative cushion
        let penetration = p - radius + half_extent;
        if penetration < 0.0 {
            p -= penetration * 2.0;
            v = -v;
            bounced = true;
        }
        v += drag_constant;
    }
    (p, v, bounced)
}

/// True if two ball centres are closer than one diameter
#[inline]
pub fn balls_overlap(a: Vec2, b: Vec2, radius: f32) -> bool {
    let diameter = radius * 2.0;
    a.distance_squared(b) < diameter * diameter
}

/// Rotation into the frame whose +x axis runs from ball A to ball B
#[derive(Debug, Clone, Copy)]
struct ContactFrame {
    cos: f32,
    sin: f32,
}

impl ContactFrame {
    fn between(a: Vec2, b: Vec2) -> Self {
        let d = b - a;
        let angle = d.y.atan2(d.x);
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    #[inline]
    fn to_local(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.cos + v.y * self.sin, v.y * self.cos - v.x * self.sin)
    }

    #[inline]
    fn to_world(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.cos - v.y * self.sin, v.y * self.cos + v.x * self.sin)
    }
}

/// Result of resolving a ball-ball contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResolution {
    pub a_pos: Vec2,
    pub a_vel: Vec2,
    pub b_pos: Vec2,
    pub b_vel: Vec2,
    /// Velocities along the line of centres before the exchange
    pub normal_before: (f32, f32),
    /// Velocities along the line of centres after the exchange
    pub normal_after: (f32, f32),
}

/// Resolve an equal-mass elastic collision between two overlapping balls.
///
/// Velocities along the line of centres are exchanged; tangential components
/// are kept. The remaining overlap is pushed out along the line of centres,
/// each ball taking a share proportional to its post-collision normal speed.
pub fn resolve_ball_pair(
    a_pos: Vec2,
    a_vel: Vec2,
    b_pos: Vec2,
    b_vel: Vec2,
    radius: f32,
    model: CollisionModel,
) -> PairResolution {
    let frame = ContactFrame::between(a_pos, b_pos);

    // Positions relative to A
    let mut p1 = Vec2::ZERO;
    let mut p2 = frame.to_local(b_pos - a_pos);

    let v1 = frame.to_local(a_vel);
    let v2 = match model {
        CollisionModel::Symmetric => frame.to_local(b_vel),
        CollisionModel::Legacy => Vec2::new(
            b_vel.x * frame.cos + b_vel.y * frame.sin,
            b_vel.y * frame.cos - b_vel.y * frame.sin,
        ),
    };

    // 1D exchange along the normal
    let normal_before = (v1.x, v2.x);
    let v1 = Vec2::new(normal_before.1, v1.y);
    let v2 = Vec2::new(normal_before.0, v2.y);

    let overlap = radius * 2.0 - (p1.x - p2.x).abs();
    let total = v1.x.abs() + v2.x.abs();
    if total > f32::EPSILON {
        p1.x += v1.x / total * overlap;
        p2.x += v2.x / total * overlap;
    } else {
        // Neither ball moves along the normal; separate them evenly
        p1.x -= overlap / 2.0;
        p2.x += overlap / 2.0;
    }

    PairResolution {
        a_pos: a_pos + frame.to_world(p1),
        a_vel: frame.to_world(v1),
        b_pos: a_pos + frame.to_world(p2),
        b_vel: frame.to_world(v2),
        normal_before,
        normal_after: (v1.x, v2.x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const R: f32 = 0.02625;

    #[test]
    fn test_free_motion_applies_drag() {
        let table = Table::default();
        let step = resolve_walls(Vec2::ZERO, Vec2::new(0.01, -0.02), &table);
        assert!(!step.bounced_x && !step.bounced_z);
        assert!((step.pos.x - 0.01).abs() < 1e-7);
        assert!((step.pos.y + 0.02).abs() < 1e-7);
        assert!((step.vel.x - (0.01 * 0.985 - 0.00001)).abs() < 1e-7);
        assert!((step.vel.y - (-0.02 * 0.985 + 0.00001)).abs() < 1e-7);
    }

    #[test]
    fn test_right_cushion_reflects() {
        let table = Table::default();
        let edge = table.half_width() - table.ball_radius();
        let step = resolve_walls(Vec2::new(edge - 0.005, 0.0), Vec2::new(0.02, 0.0), &table);
        assert!(step.bounced_x);
        // 0.015 past the cushion, reflected back by the same amount
        assert!((step.pos.x - (edge - 0.015)).abs() < 1e-5);
        assert!(step.vel.x < 0.0);
        assert!((step.vel.x + 0.02 * 0.985 + 0.00001).abs() < 1e-7);
    }

    #[test]
    fn test_far_cushion_reflects() {
        let table = Table::default();
        let edge = -table.half_length() + table.ball_radius();
        let step = resolve_walls(Vec2::new(0.0, edge + 0.001), Vec2::new(0.0, -0.01), &table);
        assert!(step.bounced_z);
        assert!(step.pos.y > edge);
        assert!(step.vel.y > 0.0);
    }

    #[test]
    fn test_zero_component_gets_constant_drag_nudge() {
        let table = Table::default();
        let step = resolve_walls(Vec2::ZERO, Vec2::new(0.0, 0.05), &table);
        assert_eq!(step.vel.x, table.drag_constant());
    }

    #[test]
    fn test_balls_overlap() {
        assert!(balls_overlap(Vec2::ZERO, Vec2::new(2.0 * R - 0.001, 0.0), R));
        assert!(!balls_overlap(Vec2::ZERO, Vec2::new(2.0 * R + 0.001, 0.0), R));
    }

    #[test]
    fn test_head_on_exchange() {
        let a = Vec2::ZERO;
        let b = Vec2::new(2.0 * R - 0.002, 0.0);
        let res = resolve_ball_pair(a, Vec2::new(0.03, 0.0), b, Vec2::ZERO, R, CollisionModel::Symmetric);
        // Striker stops dead, object ball takes all the speed
        assert!(res.a_vel.length() < 1e-6);
        assert!((res.b_vel.x - 0.03).abs() < 1e-6);
        // All correction goes to the ball that is now moving
        assert!((res.a_pos - a).length() < 1e-6);
        assert!((res.b_pos.distance(res.a_pos) - 2.0 * R).abs() < 1e-5);
    }

    #[test]
    fn test_glancing_keeps_tangential() {
        // Contact along +z, A moving diagonally
        let a = Vec2::ZERO;
        let b = Vec2::new(0.0, 2.0 * R - 0.001);
        let res = resolve_ball_pair(a, Vec2::new(0.02, 0.02), b, Vec2::ZERO, R, CollisionModel::Symmetric);
        assert!((res.a_vel.x - 0.02).abs() < 1e-6);
        assert!(res.a_vel.y.abs() < 1e-6);
        assert!(res.b_vel.x.abs() < 1e-6);
        assert!((res.b_vel.y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_stationary_normal_separates_evenly() {
        let a = Vec2::ZERO;
        let b = Vec2::new(2.0 * R - 0.004, 0.0);
        // Both moving purely tangentially
        let res = resolve_ball_pair(a, Vec2::new(0.0, 0.01), b, Vec2::new(0.0, -0.01), R, CollisionModel::Symmetric);
        assert!(res.a_pos.x.is_finite() && res.b_pos.x.is_finite());
        assert!((res.a_pos.x + 0.002).abs() < 1e-5);
        assert!((res.b_pos.x - (b.x + 0.002)).abs() < 1e-5);
    }

    #[test]
    fn test_legacy_model_differs_for_moving_second_ball() {
        let a = Vec2::ZERO;
        let b = Vec2::new(2.0 * R - 0.001, 2.0 * R - 0.001) * std::f32::consts::FRAC_1_SQRT_2;
        let va = Vec2::new(0.02, 0.0);
        let vb = Vec2::new(-0.01, 0.015);
        let sym = resolve_ball_pair(a, va, b, vb, R, CollisionModel::Symmetric);
        let legacy = resolve_ball_pair(a, va, b, vb, R, CollisionModel::Legacy);
        assert_eq!(sym.normal_after, legacy.normal_after);
        assert!((sym.b_vel - legacy.b_vel).length() > 1e-4);
    }

    proptest! {
        #[test]
        fn walls_keep_ball_on_table(
            x in -0.86f32..0.86,
            z in -1.75f32..1.75,
            vx in -0.2f32..0.2,
            vz in -0.2f32..0.2,
        ) {
            let table = Table::default();
            let r = table.ball_radius();
            let step = resolve_walls(Vec2::new(x, z), Vec2::new(vx, vz), &table);
            if step.bounced_x {
                prop_assert!(step.pos.x.abs() + r <= table.half_width() + 1e-5);
            }
            if step.bounced_z {
                prop_assert!(step.pos.y.abs() + r <= table.half_length() + 1e-5);
            }
        }

        #[test]
        fn exchange_conserves_normal_energy(
            angle in 0.0f32..std::f32::consts::TAU,
            gap in 0.0001f32..0.01,
            ax in -0.1f32..0.1, az in -0.1f32..0.1,
            bx in -0.1f32..0.1, bz in -0.1f32..0.1,
            legacy in any::<bool>(),
        ) {
            let model = if legacy { CollisionModel::Legacy } else { CollisionModel::Symmetric };
            let a = Vec2::new(0.2, -0.3);
            let b = a + Vec2::new(angle.cos(), angle.sin()) * (2.0 * R - gap);
            let res = resolve_ball_pair(a, Vec2::new(ax, az), b, Vec2::new(bx, bz), R, model);
            let (u1, u2) = res.normal_before;
            let (w1, w2) = res.normal_after;
            prop_assert_eq!(w1, u2);
            prop_assert_eq!(w2, u1);
            prop_assert!(((u1 * u1 + u2 * u2) - (w1 * w1 + w2 * w2)).abs() < 1e-9);
        }

        #[test]
        fn symmetric_exchange_conserves_momentum(
            angle in 0.0f32..std::f32::consts::TAU,
            ax in -0.1f32..0.1, az in -0.1f32..0.1,
            bx in -0.1f32..0.1, bz in -0.1f32..0.1,
        ) {
            let a = Vec2::ZERO;
            let b = Vec2::new(angle.cos(), angle.sin()) * (2.0 * R - 0.001);
            let va = Vec2::new(ax, az);
            let vb = Vec2::new(bx, bz);
            let res = resolve_ball_pair(a, va, b, vb, R, CollisionModel::Symmetric);
            prop_assert!(((va + vb) - (res.a_vel + res.b_vel)).length() < 1e-5);
            let ke_before = va.length_squared() + vb.length_squared();
            let ke_after = res.a_vel.length_squared() + res.b_vel.length_squared();
            prop_assert!((ke_before - ke_after).abs() < 1e-5);
        }
    }
}
