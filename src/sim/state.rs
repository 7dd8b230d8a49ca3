//! Simulation state
//!
//! The simulation exclusively owns the balls. Callers read them through
//! shared references and influence them only by striking the cue ball.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::rack::{BallSet, CUE_SLOT};
use super::table::Table;
use crate::heading_to_vec;
use crate::settings::Settings;

/// A cue strike command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    /// Aim on the table plane in radians; 0 aims toward +z, π/2 toward +x
    pub angle: f32,
    /// Speed in table units per tick; negative strikes backwards
    pub power: f32,
}

impl Strike {
    pub fn new(angle: f32, power: f32) -> Self {
        Self { angle, power }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    table: Table,
    balls: BallSet,
    /// Ticks advanced since the rack was built
    pub time_ticks: u64,
}

impl Simulation {
    /// A freshly racked table
    pub fn new(table: Table) -> Self {
        let balls = BallSet::rack(&table);
        Self::with_balls(table, balls)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Table::from_settings(settings))
    }

    /// Start from a custom layout (practice positions, tests)
    pub fn with_balls(table: Table, balls: BallSet) -> Self {
        Self {
            table,
            balls,
            time_ticks: 0,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &BallSet {
        &self.balls
    }

    pub(crate) fn parts_mut(&mut self) -> (&Table, &mut BallSet) {
        (&self.table, &mut self.balls)
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.cue()
    }

    /// True once every remaining ball has come to rest
    pub fn is_settled(&self) -> bool {
        !self.balls.any_in_motion()
    }

    /// Send the cue ball off along `angle` at `power`.
    ///
    /// Striking after the cue ball has been potted is logged and ignored.
    pub fn strike(&mut self, angle: f32, power: f32) {
        match self.balls.get_mut(CUE_SLOT) {
            Some(cue) => {
                cue.set_velocity(heading_to_vec(angle, power));
                log::debug!("Cue struck: angle={:.3} power={:.4}", angle, power);
            }
            None => log::warn!("Tried to strike a cue ball that doesn't exist"),
        }
    }

    /// Toggle every remaining ball between sphere and cylinder
    pub fn swap_shapes(&mut self) {
        for (_, ball) in self.balls.iter_mut() {
            ball.toggle_shape();
        }
    }

    /// Throw away the current frame and rack up again
    pub fn rerack(&mut self) {
        self.balls = BallSet::rack(&self.table);
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::{BallShape, BallType};
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new_simulation_is_settled() {
        let sim = Simulation::new(Table::default());
        assert!(sim.is_settled());
        assert_eq!(sim.balls().active_count(), 22);
        assert_eq!(sim.cue_ball().unwrap().kind(), BallType::Cue);
    }

    #[test]
    fn test_strike_straight_up_table() {
        let mut sim = Simulation::new(Table::default());
        sim.strike(0.0, 0.05);
        let cue = sim.cue_ball().unwrap();
        assert_eq!(cue.velocity(), Vec2::new(0.0, 0.05));
        assert!(cue.is_in_motion());
    }

    #[test]
    fn test_strike_sideways() {
        let mut sim = Simulation::new(Table::default());
        sim.strike(FRAC_PI_2, 0.05);
        let v = sim.cue_ball().unwrap().velocity();
        assert!((v.x - 0.05).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_negative_power_strikes_backwards() {
        let mut sim = Simulation::new(Table::default());
        sim.strike(0.0, -0.05);
        assert_eq!(sim.cue_ball().unwrap().velocity(), Vec2::new(0.0, -0.05));
    }

    #[test]
    fn test_strike_without_cue_is_noop() {
        let table = Table::default();
        let mut balls = BallSet::empty();
        balls.insert(1, Ball::new(BallType::Black, Vec2::ZERO, &table));
        let mut sim = Simulation::with_balls(table, balls);
        sim.strike(0.0, 0.05);
        assert!(sim.is_settled());
        assert_eq!(sim.balls().get(1).unwrap().velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_swap_shapes_toggles_all() {
        let mut sim = Simulation::new(Table::default());
        sim.swap_shapes();
        assert!(sim.balls().iter().all(|(_, b)| b.shape() == BallShape::Cylinder));
        sim.swap_shapes();
        assert!(sim.balls().iter().all(|(_, b)| b.shape() == BallShape::Sphere));
    }

    #[test]
    fn test_rerack_restores_all_balls() {
        let mut sim = Simulation::new(Table::default());
        sim.parts_mut().1.remove(5);
        sim.time_ticks = 10;
        sim.rerack();
        assert_eq!(sim.balls().active_count(), 22);
        assert_eq!(sim.time_ticks, 0);
    }
}
