//! Proportional rescale-to-fit.
//!
//! Shared by the sized layout driver and the plain container: a child may be
//! oversized for its cell, and the fix is a single uniform XY scale that
//! respects the tightest axis constraint while never exceeding the scale the
//! author asked for. Z is never touched; 2D layout has no business there.
//!
//! Sizes here are always measured fresh from the scene. Dividing a cached
//! measurement by a scale that changed since the measurement was taken
//! yields a garbage unscaled size, and a garbage unscaled size makes
//! constrained layouts oscillate instead of settling.

use glam::{Vec2, Vec3};
use scenery_scene::{NodeId, Scene};

/// Uniform scale factor fitting an unscaled `size` under two independent
/// maximum constraints, capped by the user's desired scale.
///
/// Either constraint may be `f32::INFINITY` for "unbounded". Non-positive
/// sizes contribute no constraint on that axis.
pub fn rescale_factor(size: Vec2, max_width: f32, max_height: f32, user_scale: f32) -> f32 {
    let mut factor = user_scale;
    if size.x > 0.0 && max_width.is_finite() {
        factor = factor.min(max_width / size.x);
    }
    if size.y > 0.0 && max_height.is_finite() {
        factor = factor.min(max_height / size.y);
    }
    factor
}

/// A node's current measured size with its own scale divided back out.
///
/// Measures fresh, so the result is invariant under the node's scale: it is
/// the size the node would measure at scale 1. A zero or negative scale on
/// either axis means the node is not yet measurable; the raw measured size
/// is returned as-is in that case.
pub fn unscaled_size(scene: &Scene, id: NodeId) -> Vec2 {
    let size = scene.measure(id).size();
    match scene.node(id) {
        Some(node) if node.transform.scale.x > 0.0 && node.transform.scale.y > 0.0 => {
            Vec2::new(size.x / node.transform.scale.x, size.y / node.transform.scale.y)
        }
        _ => size,
    }
}

/// Rescale one node to fit `(max_width, max_height)`, preserving aspect.
///
/// Nodes with zero or negative current scale are left untouched for this
/// pass; they are not yet measurable and forcing a scale on them would bake
/// in garbage.
pub fn rescale_node(scene: &mut Scene, id: NodeId, max_width: f32, max_height: f32) {
    let unscaled = unscaled_size(scene, id);
    let node = match scene.node_mut(id) {
        Some(node) => node,
        None => return,
    };
    let scale = node.transform.scale;
    if scale.x <= 0.0 || scale.y <= 0.0 {
        return;
    }
    let user_scale = node
        .desired_scale
        .map_or(1.0, |desired| desired.x.min(desired.y));
    let factor = rescale_factor(unscaled, max_width, max_height, user_scale);
    node.transform.scale = Vec3::new(factor, factor, scale.z);
}
