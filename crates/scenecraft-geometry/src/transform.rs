//! World-space placement of local-space export geometry.
//!
//! The composition order here is the interchange contract: half-extent
//! scale, then sequential elementary rotations about X, Y, Z (each
//! applied to the already-rotated point), then translation. The
//! viewport's own library-native rotation composition may differ
//! cosmetically; exported coordinates come from this path only.

use glam::Vec3;
use scenecraft_core::SceneNode;

use crate::primitives::synthesize;

/// Rotate about the X axis (right-handed).
fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate about the Y axis (right-handed).
fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate about the Z axis (right-handed).
fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Apply the fixed X-then-Y-then-Z rotation to a point.
pub fn rotate_xyz(p: Vec3, rotation: Vec3) -> Vec3 {
    rotate_z(rotate_y(rotate_x(p, rotation.x), rotation.y), rotation.z)
}

/// Map a local-space point into world space for a node placement.
///
/// Primitives are authored spanning [-1, 1], so the half scale gives
/// `scale` the conventional "full extent" meaning.
pub fn world_point(local: Vec3, position: Vec3, rotation: Vec3, scale: Vec3) -> Vec3 {
    let scaled = local * scale * 0.5;
    rotate_xyz(scaled, rotation) + position
}

/// World-space export vertices for a node, in topology order.
pub fn world_vertices(node: &SceneNode) -> Vec<Vec3> {
    let mesh = synthesize(node.geometry);
    mesh.vertices
        .iter()
        .map(|&v| world_point(v, node.position, node.rotation, node.scale))
        .collect()
}
