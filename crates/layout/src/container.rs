//! The layout container: backed children, the re-layout loop, clipping.

use crate::manager::{ChildrenBounds, LayoutManager};
use crate::params::Dimension;
use crate::rescale::rescale_node;
use scenery_core::Bounding;
use scenery_scene::{NodeId, NodeKind, Scene};
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed re-measurement interval, counted from the completion of the
/// previous pass. A slow pass therefore throttles the next one instead of
/// queueing it up.
pub const LAYOUT_INTERVAL: Duration = Duration::from_millis(50);

/// A container node that owns a backed child list and periodically lays it
/// out with a [`LayoutManager`] strategy.
///
/// The backed list is staged independently of the scene-graph attachment: a
/// newly added child only attaches under the container's content node after
/// the first layout pass that computed a position for it, so it is never
/// rendered unpositioned.
///
/// The container holds back-references, not ownership: removing a child from
/// the backed list does not destroy the node.
pub struct LayoutContainer<S: LayoutManager> {
    node: NodeId,
    strategy: S,
    backed: Vec<NodeId>,
    bounds_cache: ChildrenBounds,
    redraw_requested: bool,
    interval: Duration,
    since_last_pass: Duration,
    clip: Option<Bounding>,
}

impl<S: LayoutManager> LayoutContainer<S> {
    /// Create a container, allocating its content node in the scene.
    pub fn new(scene: &mut Scene, strategy: S) -> Self {
        Self {
            node: scene.create_node(NodeKind::Layout),
            strategy,
            backed: Vec::new(),
            bounds_cache: ChildrenBounds::new(),
            redraw_requested: false,
            interval: LAYOUT_INTERVAL,
            since_last_pass: Duration::ZERO,
            clip: None,
        }
    }

    /// The container's content node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The layout strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Mutable access to the layout strategy. Callers that change anything
    /// layout-affecting should follow up with [`request_redraw`](Self::request_redraw).
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// The backed child list, in layout order.
    pub fn children(&self) -> &[NodeId] {
        &self.backed
    }

    /// Stage a child for layout.
    ///
    /// Non-layoutable nodes (anchors) and stale handles are rejected with a
    /// warning; the rest of the container keeps working.
    pub fn add_child(&mut self, scene: &Scene, child: NodeId) {
        match scene.node(child) {
            Some(node) if node.kind.is_layoutable() => {}
            Some(node) => {
                warn!(%child, kind = ?node.kind, "rejecting non-layoutable child");
                return;
            }
            None => {
                warn!(%child, "rejecting stale child handle");
                return;
            }
        }
        self.backed.push(child);
        // Indices shift on structural change; stale entries must not survive.
        self.bounds_cache.clear();
        self.redraw_requested = true;
    }

    /// Remove a child from the backed list and detach it from the scene.
    ///
    /// The node itself stays alive; destroying it is the caller's decision.
    pub fn remove_child(&mut self, scene: &mut Scene, child: NodeId) {
        let before = self.backed.len();
        self.backed.retain(|&c| c != child);
        if self.backed.len() == before {
            return;
        }
        if scene.is_attached(self.node, child) {
            scene.detach(child);
        }
        self.bounds_cache.clear();
        self.redraw_requested = true;
    }

    /// Flag the next tick to run a full layout pass.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Whether a layout pass is pending.
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Set explicit dimensions. Fixed on both axes overrides wrap-content.
    pub fn set_size(&mut self, width: Dimension, height: Dimension) {
        let params = self.strategy.params_mut();
        params.width = width;
        params.height = height;
        self.redraw_requested = true;
    }

    /// Aggregate bounds of the container in its parent's frame, for an
    /// ancestor's measurement pass.
    pub fn bounding(&self, scene: &Scene) -> Bounding {
        scene.measure(self.node)
    }

    /// Receive a clip rectangle in the container's parent space and push it
    /// down the subtree, translated into each descendant's frame.
    pub fn set_clip_bounds(&mut self, scene: &mut Scene, bounds: Bounding) {
        self.clip = Some(bounds);
        scene.propagate_clip(self.node, bounds);
    }

    /// Advance the re-layout loop by `dt`.
    ///
    /// Once per [`LAYOUT_INTERVAL`]: measure every backed child and flag a
    /// redraw if anything moved beyond the fuzzy epsilon; rescale every
    /// child against the strategy's per-cell limits regardless of the flag
    /// (live content edits keep sizes honest between structural changes),
    /// then refresh the cached measurements so the strategy pass and the
    /// next tick's change detection see the scales actually applied; and,
    /// if a redraw is pending, run the strategy, attach any children still
    /// waiting for a first position, and refresh clipping.
    ///
    /// The gate resets to zero when a pass runs rather than carrying the
    /// overshoot, so the effective period rounds up to a whole number of
    /// host frames: a fixed delay from the previous pass, not a fixed rate.
    pub fn update(&mut self, scene: &mut Scene, dt: Duration) {
        self.since_last_pass += dt;
        if self.since_last_pass < self.interval {
            return;
        }
        self.since_last_pass = Duration::ZERO;

        for (index, &child) in self.backed.iter().enumerate() {
            let measured = scene.measure(child);
            let changed = self
                .bounds_cache
                .get(&index)
                .map_or(true, |previous| !previous.equal_inexact(&measured));
            if changed {
                self.redraw_requested = true;
            }
            self.bounds_cache.insert(index, measured);
        }

        // Fit every child against the same cell limits the strategy will
        // apply; a container-level rescale with different limits would fight
        // the strategy's own rescale over the same scale, tick after tick.
        for (index, &child) in self.backed.iter().enumerate() {
            let limit = self.strategy.max_cell_size(index);
            rescale_node(scene, child, limit.x, limit.y);
        }

        // The rescale may have changed what a child measures; stale cache
        // entries here would feed the strategy sizes from the wrong scale
        // and re-arm the redraw flag forever.
        for (index, &child) in self.backed.iter().enumerate() {
            let measured = scene.measure(child);
            let stale = self
                .bounds_cache
                .get(&index)
                .map_or(true, |previous| !previous.equal_inexact(&measured));
            if stale {
                self.redraw_requested = true;
                self.bounds_cache.insert(index, measured);
            }
        }

        if self.redraw_requested {
            debug!(container = %self.node, children = self.backed.len(), "layout pass");
            self.strategy
                .layout_children(scene, &self.backed, &self.bounds_cache);
            self.redraw_requested = false;

            for &child in &self.backed {
                if !scene.is_attached(self.node, child) {
                    scene.attach(self.node, child);
                }
            }
            // Page flips and fresh attachments need their clips recomputed.
            if let Some(clip) = self.clip {
                scene.propagate_clip(self.node, clip);
            }
        }
    }
}
