//! Deterministic snooker simulation
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only (velocities are per tick)
//! - Stable iteration order (by slot index)
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod collision;
pub mod events;
pub mod rack;
pub mod state;
pub mod table;
pub mod tick;

pub use ball::{Ball, BallShape, BallType};
pub use collision::{PairResolution, WallStep, balls_overlap, resolve_ball_pair, resolve_walls};
pub use events::{EventLog, EventSink, FnSink, GameEvent};
pub use rack::{BallSet, CUE_SLOT, pyramid};
pub use state::{Simulation, Strike};
pub use table::{POCKET_COUNT, Table};
pub use tick::{TickInput, run_until_settled, tick};
