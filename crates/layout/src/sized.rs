//! Template driver shared by every sized layout strategy.
//!
//! The pass order is fixed: strategy pre-layout, then the rescale pass, then
//! content-size resolution against the configured dimensions, then per-child
//! placement. Strategies supply the hooks; the driver supplies the order.

use crate::manager::ChildrenBounds;
use crate::params::LayoutParams;
use crate::rescale::rescale_node;
use glam::Vec2;
use scenery_core::Bounding;
use scenery_scene::{NodeId, Scene};

/// Per-child placement input, derived fresh each pass. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct NodeInfo {
    /// The child being placed.
    pub node: NodeId,
    /// Index in the container's backed child list.
    pub index: usize,
    /// Measured width from the bounds cache.
    pub width: f32,
    /// Measured height from the bounds cache.
    pub height: f32,
    /// X offset between the node's local origin and its visual center.
    pub pivot_offset_x: f32,
    /// Y offset between the node's local origin and its visual center.
    pub pivot_offset_y: f32,
}

impl NodeInfo {
    /// Derive placement info for one child.
    ///
    /// Width and height come from the cached measurement; the pivot offset
    /// comes from a fresh measurement so it stays invariant under the moves
    /// this very pass applies. A child's renderable content is not
    /// necessarily centered on its own origin, and alignment must refer to
    /// the visual bounds, not the raw transform origin.
    pub fn derive(scene: &Scene, node: NodeId, index: usize, measured: &Bounding) -> Option<Self> {
        let position = scene.node(node)?.transform.position;
        let center = scene.measure(node).center();
        let size = measured.size();
        Some(Self {
            node,
            index,
            width: size.x,
            height: size.y,
            pivot_offset_x: position.x - center.x,
            pivot_offset_y: position.y - center.y,
        })
    }
}

/// Hooks a sized strategy plugs into the [`layout_sized`] driver.
pub trait SizedLayout {
    /// Shared configuration.
    fn params(&self) -> &LayoutParams;

    /// Mutable shared configuration.
    fn params_mut(&mut self) -> &mut LayoutParams;

    /// Strategy-specific adjustment before sizing. Default no-op.
    fn pre_layout(&mut self, _scene: &mut Scene, _children: &[NodeId], _bounds: &ChildrenBounds) {}

    /// Maximum permitted unscaled width for the child at `index`.
    /// `f32::INFINITY` means unbounded.
    fn max_child_width(&self, _index: usize) -> f32 {
        f32::INFINITY
    }

    /// Maximum permitted unscaled height for the child at `index`.
    fn max_child_height(&self, _index: usize) -> f32 {
        f32::INFINITY
    }

    /// Aggregate content size after [`pre_layout`](Self::pre_layout).
    fn content_size(&self) -> Vec2;

    /// Assign the child a new local position.
    ///
    /// `content_size` is the aggregate of §content-size resolution;
    /// `size_limit` is the effective layout size limit per axis (the content
    /// size on wrap-content axes, the configured extent on fixed axes).
    fn layout_node(&mut self, scene: &mut Scene, info: &NodeInfo, content_size: Vec2, size_limit: Vec2);
}

/// Run one full sized layout pass.
pub fn layout_sized<S: SizedLayout + ?Sized>(
    strategy: &mut S,
    scene: &mut Scene,
    children: &[NodeId],
    bounds: &ChildrenBounds,
) {
    strategy.pre_layout(scene, children, bounds);

    // Rescale pass: every child, every pass. Each child is measured fresh
    // inside rescale_node, so the factor is computed against the child's
    // current scale rather than whatever scale the bounds cache last saw.
    // Degenerate scales are skipped inside rescale_node.
    for (index, &child) in children.iter().enumerate() {
        rescale_node(
            scene,
            child,
            strategy.max_child_width(index),
            strategy.max_child_height(index),
        );
    }

    // Content-size negotiation: wrap-content axes collapse to the content
    // size, fixed axes keep their configured extent.
    let content = strategy.content_size();
    let size_limit = Vec2::new(
        strategy.params().width.resolve(content.x),
        strategy.params().height.resolve(content.y),
    );

    for (index, &child) in children.iter().enumerate() {
        let measured = bounds.get(&index).copied().unwrap_or(Bounding::ZERO);
        if let Some(info) = NodeInfo::derive(scene, child, index, &measured) {
            strategy.layout_node(scene, &info, content, size_limit);
        }
    }
}
