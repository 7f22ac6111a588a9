//! Transform nodes and their local state.

use glam::{Quat, Vec3};
use scenery_core::Bounding;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a node inside a [`Scene`](crate::Scene).
///
/// Handles are never reused within one scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Closed set of node kinds.
///
/// Kinds replace a subclass hierarchy: behavior differences are expressed by
/// the systems operating on a node, not by the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A leaf widget with renderable content (text, image, button face).
    Widget,
    /// A plain grouping transform with no content of its own.
    Group,
    /// The content node of a layout container.
    Layout,
    /// A tracked world anchor. Positioned by the AR session, not by layout.
    Anchor,
}

impl NodeKind {
    /// Whether a layout container may manage a node of this kind.
    pub fn is_layoutable(&self) -> bool {
        !matches!(self, Self::Anchor)
    }
}

/// Local transform relative to the parent's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position of the local origin in the parent frame.
    pub position: Vec3,
    /// Local rotation. Carried but ignored by 2D layout.
    pub rotation: Quat,
    /// Local scale per axis.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub kind: NodeKind,
    /// Local transform relative to the parent.
    pub transform: Transform,
    /// Parent handle, if attached anywhere.
    pub parent: Option<NodeId>,
    /// Ordered children.
    pub children: Vec<NodeId>,
    /// Intrinsic content bounds in the node's own frame, unscaled.
    ///
    /// Set by whatever renders the node's content (text measurement, image
    /// extent). Zero for nodes without content.
    pub content: Bounding,
    /// Whether the renderer should draw this node and its subtree.
    pub visible: bool,
    /// User-authored local scale override, if any.
    ///
    /// Layout rewrites `transform.scale` every rescale pass; this records
    /// what the author asked for so the rescale never exceeds it. `None`
    /// means an effective uniform cap of 1.
    pub desired_scale: Option<Vec3>,
    /// Active clip rectangle in the node's own frame, if any ancestor
    /// propagated one.
    pub clip: Option<Bounding>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            transform: Transform::default(),
            parent: None,
            children: Vec::new(),
            content: Bounding::ZERO,
            visible: true,
            desired_scale: None,
            clip: None,
        }
    }

    /// Local position in the parent frame.
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Local scale.
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }
}
