//! Scene-graph layout for AR user interfaces.
//!
//! `scenery` positions, sizes, scales, and clips a tree of transform nodes
//! embedded in a 3D scene, driven by declarative property updates. The crate
//! is the layout core only: rendering, anchor tracking, and gesture handling
//! are the host's business.
//!
//! # Example
//!
//! ```rust
//! use scenery::{Bounding, GridLayout, LayoutContainer, NodeKind, Scene};
//! use std::time::Duration;
//!
//! let mut scene = Scene::new();
//! let mut grid = LayoutContainer::new(&mut scene, GridLayout::new(2, 0));
//!
//! let label = scene.create_node(NodeKind::Widget);
//! scene.node_mut(label).unwrap().content = Bounding::new(-0.5, -0.25, 0.5, 0.25);
//! grid.add_child(&scene, label);
//!
//! // Once per frame from the host's scene-update loop:
//! grid.update(&mut scene, Duration::from_millis(50));
//! assert!(scene.is_attached(grid.node(), label));
//! ```

// Re-export commonly used types
pub use glam::{Vec2, Vec3};
pub use scenery_core::{
    Alignment, AlignmentParseError, Bounding, HorizontalAlign, Padding, VerticalAlign,
    BOUNDS_EPSILON,
};
pub use scenery_layout::{
    ChildrenBounds, Dimension, GridLayout, LayoutContainer, LayoutManager, LayoutParams,
    LinearLayout, NodeInfo, Orientation, PageViewLayout, LAYOUT_INTERVAL,
};
pub use scenery_props::{
    apply_grid_update, apply_linear_update, apply_page_view_update, create_grid, create_linear,
    create_page_view, LayoutPatch, PropsError,
};
pub use scenery_scene::{Node, NodeId, NodeKind, Scene, Transform};

use anyhow::Result;

/// Version of the scenery crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the layout subsystem with default settings.
pub fn init() -> Result<()> {
    tracing::info!("Initializing scenery v{}", VERSION);
    Ok(())
}
