//! Linear (stack) layout: a grid with one column or one row.

use crate::grid::GridLayout;
use crate::manager::{ChildrenBounds, LayoutManager};
use crate::params::LayoutParams;
use crate::sized::{layout_sized, NodeInfo, SizedLayout};
use glam::Vec2;
use scenery_core::{Alignment, Padding};
use scenery_scene::{NodeId, Scene};

/// Stacking direction for a [`LinearLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One column, top to bottom.
    #[default]
    Vertical,
    /// One row, left to right.
    Horizontal,
}

/// Stacks children vertically or horizontally.
///
/// Shares the grid cell math: a vertical stack is a one-column grid, a
/// horizontal stack is a one-row grid whose column count tracks the child
/// count.
#[derive(Debug, Clone)]
pub struct LinearLayout {
    grid: GridLayout,
    orientation: Orientation,
}

impl LinearLayout {
    /// Create a stack in the given direction.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            grid: GridLayout::new(1, 0),
            orientation,
        }
    }

    /// Builder: set the shared layout params.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.grid = self.grid.with_params(params);
        self
    }

    /// Stacking direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Override the alignment for one child index.
    pub fn set_item_alignment(&mut self, index: usize, alignment: Alignment) {
        self.grid.set_item_alignment(index, alignment);
    }

    /// Override the padding for one child index.
    pub fn set_item_padding(&mut self, index: usize, padding: Padding) {
        self.grid.set_item_padding(index, padding);
    }
}

impl SizedLayout for LinearLayout {
    fn params(&self) -> &LayoutParams {
        SizedLayout::params(&self.grid)
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        SizedLayout::params_mut(&mut self.grid)
    }

    fn pre_layout(&mut self, scene: &mut Scene, children: &[NodeId], bounds: &ChildrenBounds) {
        match self.orientation {
            Orientation::Vertical => self.grid.set_columns(1),
            Orientation::Horizontal => self.grid.set_columns(children.len()),
        }
        self.grid.pre_layout(scene, children, bounds);
    }

    fn max_child_width(&self, index: usize) -> f32 {
        self.grid.max_child_width(index)
    }

    fn max_child_height(&self, index: usize) -> f32 {
        self.grid.max_child_height(index)
    }

    fn content_size(&self) -> Vec2 {
        self.grid.content_size()
    }

    fn layout_node(&mut self, scene: &mut Scene, info: &NodeInfo, content_size: Vec2, size_limit: Vec2) {
        self.grid.layout_node(scene, info, content_size, size_limit);
    }
}

impl LayoutManager for LinearLayout {
    fn params(&self) -> &LayoutParams {
        SizedLayout::params(self)
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        SizedLayout::params_mut(self)
    }

    fn max_cell_size(&self, index: usize) -> Vec2 {
        Vec2::new(
            SizedLayout::max_child_width(self, index),
            SizedLayout::max_child_height(self, index),
        )
    }

    fn layout_children(&mut self, scene: &mut Scene, children: &[NodeId], bounds: &ChildrenBounds) {
        layout_sized(self, scene, children, bounds);
    }
}
