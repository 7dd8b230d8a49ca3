//! Ball slots and the initial snooker rack
//!
//! Slots are stable for the life of a rack:
//! 0 = cue, 1 = black, 2 = pink, 3 = blue, 4 = brown, 5 = green,
//! 6 = yellow, 7..=21 = reds. A potted ball leaves its slot empty; slots are
//! never compacted or refilled.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallType};
use super::table::Table;
use crate::consts::SLOT_COUNT;

pub const CUE_SLOT: usize = 0;
pub const BLACK_SLOT: usize = 1;
pub const PINK_SLOT: usize = 2;
pub const BLUE_SLOT: usize = 3;
pub const BROWN_SLOT: usize = 4;
pub const GREEN_SLOT: usize = 5;
pub const YELLOW_SLOT: usize = 6;
pub const FIRST_RED_SLOT: usize = 7;
pub const RED_COUNT: usize = 15;
/// Rows in the red pyramid (1 + 2 + 3 + 4 + 5 = 15)
pub const PYRAMID_ROWS: usize = 5;

/// Fixed-capacity arena of balls indexed by slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallSet {
    slots: [Option<Ball>; SLOT_COUNT],
}

impl BallSet {
    /// A set with every slot empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 22-ball snooker rack for `table`
    pub fn rack(table: &Table) -> Self {
        let mut set = Self::empty();
        let baulk = table.baulk_line();
        let d = table.d_radius();
        let length = table.length();
        let r = table.ball_radius();

        let mut place = |slot: usize, kind: BallType, x: f32, z: f32| {
            set.slots[slot] = Some(Ball::new(kind, Vec2::new(x, z), table));
        };

        place(CUE_SLOT, BallType::Cue, -d / 2.0, baulk + d / 4.0);
        place(BLACK_SLOT, BallType::Black, 0.0, length * -0.409090909);
        place(PINK_SLOT, BallType::Pink, 0.0, -length / 4.0);
        place(BLUE_SLOT, BallType::Blue, 0.0, 0.0);
        place(BROWN_SLOT, BallType::Brown, 0.0, baulk);
        place(GREEN_SLOT, BallType::Green, d, baulk);
        place(YELLOW_SLOT, BallType::Yellow, -d, baulk);

        let apex = Vec2::new(0.0, -length / 4.0 - 2.0 * r);
        for (i, pos) in pyramid(apex, PYRAMID_ROWS, r).into_iter().enumerate() {
            place(FIRST_RED_SLOT + i, BallType::Red, pos.x, pos.y);
        }

        log::info!(
            "Racked {} balls on a {:.3} x {:.3} table",
            set.active_count(),
            table.width(),
            length
        );
        set
    }

    /// Put a ball into a slot, replacing whatever was there.
    /// Returns `false` if the slot index is out of range.
    pub fn insert(&mut self, slot: usize, ball: Ball) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(ball);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, slot: usize) -> Option<&Ball> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Ball> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Take a ball out of play; the slot stays empty
    pub(crate) fn remove(&mut self, slot: usize) -> Option<Ball> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Two distinct occupied slots, mutably
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Ball, &mut Ball)> {
        if i >= j || j >= SLOT_COUNT {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(j);
        match (head[i].as_mut(), tail[0].as_mut()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn cue(&self) -> Option<&Ball> {
        self.get(CUE_SLOT)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Ball)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|b| (i, b)))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Ball)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, b)| b.as_mut().map(|b| (i, b)))
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.iter().count()
    }

    pub fn any_in_motion(&self) -> bool {
        self.iter().any(|(_, b)| b.is_in_motion())
    }

    pub const fn capacity(&self) -> usize {
        SLOT_COUNT
    }
}

/// Centres of a triangular pyramid growing toward `-z` from `apex`.
///
/// Row `i` holds `i + 1` balls spaced `2.2r` apart; each row starts `1.1r`
/// further left and `sin(60°)·2.2r` further back than the one before.
pub fn pyramid(apex: Vec2, rows: usize, radius: f32) -> Vec<Vec2> {
    let step_x = radius * 1.1;
    let step_z = (std::f32::consts::PI / 3.0).sin() * radius * 2.2;
    let mut out = Vec::with_capacity(rows * (rows + 1) / 2);
    let mut row_start = apex;
    for row in 0..rows {
        for j in 0..=row {
            out.push(Vec2::new(row_start.x + step_x * 2.0 * j as f32, row_start.y));
        }
        row_start -= Vec2::new(step_x, step_z);
    }
    out
}
