//! The layout strategy interface.

use crate::params::LayoutParams;
use glam::Vec2;
use scenery_core::Bounding;
use scenery_scene::{NodeId, Scene};
use std::collections::HashMap;

/// Last-measured bounds per child index.
///
/// Cleared wholesale on any structural change to the child list, because the
/// indices shift. Strategies must tolerate missing entries (treated as a
/// zero-size [`Bounding`]) and must never assume this map and the child
/// slice have the same length.
pub type ChildrenBounds = HashMap<usize, Bounding>;

/// A layout strategy: assigns local positions to a container's children.
///
/// Implementations must be idempotent: given the same `children` and
/// `bounds`, a second call produces identical final positions.
pub trait LayoutManager {
    /// Shared configuration.
    fn params(&self) -> &LayoutParams;

    /// Mutable shared configuration.
    fn params_mut(&mut self) -> &mut LayoutParams;

    /// Maximum unscaled cell size granted to the child at `index`.
    ///
    /// The container's per-tick rescale uses this so that it fits children
    /// against the same constraints the strategy's own layout pass does;
    /// disagreeing constraints would leave two rescales fighting over the
    /// same scale. Infinite components mean unconstrained.
    fn max_cell_size(&self, _index: usize) -> Vec2 {
        Vec2::INFINITY
    }

    /// Position every child. Children are index-aligned with `bounds` by
    /// their position in `children`.
    fn layout_children(&mut self, scene: &mut Scene, children: &[NodeId], bounds: &ChildrenBounds);
}
