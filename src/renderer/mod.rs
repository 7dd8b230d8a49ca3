//! Render-side views of the simulation
//!
//! The simulation never draws anything; a renderer pulls instance data from
//! here once per frame after ticking.

pub mod instance;

pub use instance::{BallInstance, ball_instances, instance_bytes};
