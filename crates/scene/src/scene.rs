//! The node arena and tree operations.

use crate::node::{Node, NodeId, NodeKind};
use glam::Vec2;
use scenery_core::Bounding;
use std::collections::HashMap;
use tracing::warn;

/// Owns every node in one scene and hands out [`NodeId`] handles.
///
/// All layout state lives here; the subsystem is single-threaded by design,
/// so the scene is mutated only from the host's scene-update context.
pub struct Scene {
    nodes: HashMap<NodeId, Node>,
    next_handle: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Create a detached node of the given kind.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(id, Node::new(kind));
        id
    }

    /// Remove a node and its whole subtree.
    pub fn remove_node(&mut self, id: NodeId) {
        self.detach(id);
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                pending.extend(node.children);
            }
        }
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    /// first. Returns false (with a warning) if either handle is stale or the
    /// attachment would be degenerate, including attaching a node anywhere
    /// under its own subtree; the tree must stay acyclic or the recursive
    /// walks in [`measure`](Self::measure) and
    /// [`propagate_clip`](Self::propagate_clip) never terminate.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child {
            warn!(%parent, "refusing to attach a node to itself");
            return false;
        }
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            warn!(%parent, %child, "attach with stale handle ignored");
            return false;
        }
        let mut ancestor = self.nodes.get(&parent).and_then(|n| n.parent);
        while let Some(current) = ancestor {
            if current == child {
                warn!(%parent, %child, "refusing attach that would create a cycle");
                return false;
            }
            ancestor = self.nodes.get(&current).and_then(|n| n.parent);
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        true
    }

    /// Detach `child` from its parent, if it has one. The node stays alive.
    pub fn detach(&mut self, child: NodeId) {
        let parent = match self.nodes.get(&child).and_then(|n| n.parent) {
            Some(parent) => parent,
            None => return,
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
        }
    }

    /// Whether `child` is currently attached under `parent`.
    pub fn is_attached(&self, parent: NodeId, child: NodeId) -> bool {
        self.nodes
            .get(&child)
            .map_or(false, |n| n.parent == Some(parent))
    }

    /// Measure a node's bounds expressed in its parent's frame.
    ///
    /// The local extent is the union of the node's intrinsic content bounds
    /// and every child's measured bounds; the result is then scaled by the
    /// node's local scale and translated by its local position. Rotation is
    /// ignored, which is the 2D layout contract.
    pub fn measure(&self, id: NodeId) -> Bounding {
        let node = match self.nodes.get(&id) {
            Some(node) => node,
            None => return Bounding::ZERO,
        };
        let mut local = node.content;
        for &child in &node.children {
            local = local.union(&self.measure(child));
        }
        let scale = Vec2::new(node.transform.scale.x, node.transform.scale.y);
        local
            .scaled(scale)
            .translate(Vec2::new(node.transform.position.x, node.transform.position.y))
    }

    /// Propagate a clip rectangle down the subtree rooted at `id`.
    ///
    /// `bounds` is expressed in the parent frame of `id`; each node stores
    /// the rectangle translated into its own frame and forwards that to its
    /// children, so nested containers keep subtracting their own offsets.
    pub fn propagate_clip(&mut self, id: NodeId, bounds: Bounding) {
        let (local, children) = match self.nodes.get_mut(&id) {
            Some(node) => {
                let position = node.transform.position;
                let local = bounds.translate(Vec2::new(-position.x, -position.y));
                node.clip = Some(local);
                (local, node.children.clone())
            }
            None => return,
        };
        for child in children {
            self.propagate_clip(child, local);
        }
    }
}
