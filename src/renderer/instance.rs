//! Per-ball instance data for a 3D renderer

use bytemuck::{Pod, Zeroable};

use crate::sim::{BallSet, BallShape};

/// One ball's transform and look, laid out for a GPU instance buffer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    /// World translation (x, rest height, z)
    pub translation: [f32; 3],
    /// 0 = sphere, 1 = cylinder
    pub shape: u32,
    pub color: [f32; 3],
    /// Slot the ball occupies in the rack
    pub slot: u32,
}

impl BallInstance {
    pub const STRIDE_BYTES: usize = std::mem::size_of::<BallInstance>();
}

/// Instances for every ball still in play, in slot order.
/// Potted balls are skipped.
pub fn ball_instances(balls: &BallSet) -> Vec<BallInstance> {
    balls
        .iter()
        .map(|(slot, ball)| BallInstance {
            translation: ball.translation().to_array(),
            shape: match ball.shape() {
                BallShape::Sphere => 0,
                BallShape::Cylinder => 1,
            },
            color: ball.color(),
            slot: slot as u32,
        })
        .collect()
}

/// Raw bytes ready for upload
pub fn instance_bytes(instances: &[BallInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
