//! Two-player mechanical scoreboard
//!
//! Each player has three decimal dials (hundreds, tens, units). Scoring a
//! point rolls the units dial forward one symbol and carries into the dials
//! to its left, wrapping at 999. Every dial movement is reported as a
//! [`DialTurn`] so a renderer can animate the wheel the short way round.

use serde::{Deserialize, Serialize};

use crate::normalize_angle;
use crate::sim::{EventSink, GameEvent};

/// Symbols on a dial
pub const DIAL_SYMBOLS: u8 = 10;
/// Angle between adjacent symbols
pub const DIAL_STEP: f32 = std::f32::consts::TAU / DIAL_SYMBOLS as f32;
/// Dials per player
pub const DIALS_PER_PLAYER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A single rotating digit wheel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dial {
    pub digit: u8,
    /// Angle the wheel is turned to, radians
    pub angle: f32,
}

impl Dial {
    /// Advance one symbol. Returns the turn and whether the dial wrapped to 0.
    fn advance(&mut self) -> (f32, f32, bool) {
        let from = self.angle.rem_euclid(std::f32::consts::TAU);
        let next = self.digit + 1;
        self.digit = next % DIAL_SYMBOLS;

        let target = next as f32 * DIAL_STEP;
        let to = from + normalize_angle(target - from);
        self.angle = to;
        (from, to, self.digit == 0)
    }
}

/// One animated dial movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialTurn {
    pub player: Player,
    /// 0 = hundreds, 2 = units
    pub dial: usize,
    pub from: f32,
    pub to: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    dials: [[Dial; DIALS_PER_PLAYER]; 2],
    /// Player credited with potted balls
    pub active: Player,
    /// Turns not yet collected by the renderer
    #[serde(skip)]
    pending: Vec<DialTurn>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one point for `player`, carrying into higher dials
    pub fn score(&mut self, player: Player) {
        let dials = &mut self.dials[player.index()];
        for dial in (0..DIALS_PER_PLAYER).rev() {
            let (from, to, wrapped) = dials[dial].advance();
            self.pending.push(DialTurn {
                player,
                dial,
                from,
                to,
            });
            if !wrapped {
                break;
            }
        }
    }

    pub fn add_points(&mut self, player: Player, points: u32) {
        for _ in 0..points {
            self.score(player);
        }
    }

    /// Score shown for `player` (0..=999)
    pub fn total(&self, player: Player) -> u32 {
        self.dials[player.index()]
            .iter()
            .fold(0, |acc, d| acc * 10 + d.digit as u32)
    }

    pub fn dials(&self, player: Player) -> &[Dial; DIALS_PER_PLAYER] {
        &self.dials[player.index()]
    }

    pub fn switch_player(&mut self) {
        self.active = self.active.other();
    }

    /// Take the dial turns produced since the last call
    pub fn drain_turns(&mut self) -> Vec<DialTurn> {
        std::mem::take(&mut self.pending)
    }
}

impl EventSink for Scoreboard {
    fn on_event(&mut self, event: GameEvent) {
        if let GameEvent::Scored { points, .. } = event {
            self.add_points(self.active, points);
        }
    }
}
