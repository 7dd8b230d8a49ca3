//! Fixed timestep simulation tick
//!
//! One call advances every ball by exactly one tick. Velocities and drag are
//! per-tick quantities, so the caller must tick at the nominal rate
//! ([`crate::consts::SIM_DT`]) rather than scaling by measured frame time.

use glam::Vec2;

use super::collision::{balls_overlap, resolve_ball_pair, resolve_walls};
use super::events::{EventSink, GameEvent};
use super::rack::BallSet;
use super::state::{Simulation, Strike};
use super::table::Table;
use crate::consts::{OFF_TABLE, SLOT_COUNT};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Strike the cue ball before moving anything
    pub strike: Option<Strike>,
    /// Toggle ball shapes (cosmetic)
    pub swap_shapes: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(sim: &mut Simulation, input: &TickInput, sink: &mut impl EventSink) {
    if let Some(strike) = input.strike {
        sim.strike(strike.angle, strike.power);
    }
    if input.swap_shapes {
        sim.swap_shapes();
    }

    sim.time_ticks += 1;

    let (table, balls) = sim.parts_mut();
    move_balls(table, balls, sink);
    collide_balls(table, balls, sink);
}

/// Tick until every ball is at rest or `max_ticks` have elapsed.
/// Returns the number of ticks advanced.
pub fn run_until_settled(sim: &mut Simulation, max_ticks: u64, sink: &mut impl EventSink) -> u64 {
    let input = TickInput::default();
    let mut ticks = 0;
    while ticks < max_ticks && !sim.is_settled() {
        tick(sim, &input, sink);
        ticks += 1;
    }
    ticks
}

/// Pot or integrate every moving ball, in slot order
fn move_balls(table: &Table, balls: &mut BallSet, sink: &mut impl EventSink) {
    for slot in 0..SLOT_COUNT {
        let Some(ball) = balls.get_mut(slot) else {
            continue;
        };
        if !ball.is_in_motion() {
            continue;
        }

        if let Some(pocket) = table.pocket_containing(ball.position()) {
            ball.stop();
            ball.set_position(Vec2::splat(OFF_TABLE));
            let kind = ball.kind();
            let points = ball.point_value();
            balls.remove(slot);

            log::info!("Potted {} ball (slot {}) for {} points", kind.as_str(), slot, points);
            sink.on_event(GameEvent::Scored {
                slot,
                kind,
                pocket,
                points,
            });
            continue;
        }

        let step = resolve_walls(ball.position(), ball.velocity(), table);
        if step.bounced_x || step.bounced_z {
            log::trace!("Slot {} cushion bounce at ({:.3}, {:.3})", slot, step.pos.x, step.pos.y);
        }
        ball.set_position(step.pos);
        ball.set_velocity(step.vel);
    }
}

/// Resolve every touching pair where at least one ball is moving
fn collide_balls(table: &Table, balls: &mut BallSet, sink: &mut impl EventSink) {
    let radius = table.ball_radius();
    let model = table.collision_model();

    for i in 0..SLOT_COUNT - 1 {
        for j in i + 1..SLOT_COUNT {
            let Some((a, b)) = balls.pair_mut(i, j) else {
                continue;
            };
            if !(a.is_in_motion() || b.is_in_motion()) {
                continue;
            }
            if !balls_overlap(a.position(), b.position(), radius) {
                continue;
            }

            let res = resolve_ball_pair(
                a.position(),
                a.velocity(),
                b.position(),
                b.velocity(),
                radius,
                model,
            );
            a.set_position(res.a_pos);
            b.set_position(res.b_pos);
            a.set_velocity(res.a_vel);
            b.set_velocity(res.b_vel);

            log::debug!("Collision between slots {} and {}", i, j);
            sink.on_event(GameEvent::CollisionSound { a: i, b: j });
        }
    }
}
